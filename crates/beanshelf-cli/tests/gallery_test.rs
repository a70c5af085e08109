use beanshelf_testing::TestWorld;

#[test]
fn test_default_selection_uses_first_three_buckets() {
    let world = TestWorld::new();

    let result = world.run(&["gallery", "--format", "json"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    let json = result.json().unwrap();
    assert_eq!(json["source"], "bundled");
    assert_eq!(
        json["active"],
        serde_json::json!(["B", "Berry", "Citrus"])
    );
    // Popcorn (B), Very Cherry and Blueberry (Berry), Lemon Drop and Tangerine (Citrus)
    assert_eq!(json["beans"].as_array().unwrap().len(), 5);
}

#[test]
fn test_explicit_buckets() {
    let world = TestWorld::new();

    let result = world
        .run(&["gallery", "--bucket", "Spice", "--bucket", "Mint"])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("[x] Mint"));
    assert!(result.stdout.contains("[x] Spice"));
    assert!(result.stdout.contains("[ ] Berry"));
    assert!(result.stdout.contains("Licorice [no image]"));
    assert!(result.stdout.ends_with("4 beans (source: bundled)\n"));
}
