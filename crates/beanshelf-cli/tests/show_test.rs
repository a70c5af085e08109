use beanshelf_testing::TestWorld;

#[test]
fn test_deep_link_without_sources_is_not_found() {
    let world = TestWorld::new();

    let result = world.run(&["show", "bean-001"]).unwrap();

    assert!(!result.success());
    assert!(result.stdout.is_empty());
    assert!(
        result.stderr.contains("Not found: bean-001"),
        "stderr: {}",
        result.stderr
    );
}
