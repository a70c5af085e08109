use beanshelf_testing::TestWorld;
use beanshelf_testing::assertions::assert_listing;

#[test]
fn test_unreachable_endpoints_fall_back_to_bundled_dataset() {
    let world = TestWorld::new();

    let result = world.run(&["list", "--format", "json"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    let json = result.json().unwrap();
    assert_listing(&json, "bundled", 12).unwrap();
    // Alias fields resolved and ordered by name
    assert_eq!(json["beans"][0]["name"], "Blueberry");
    assert_eq!(json["beans"][0]["group"], "Berry");
}

#[test]
fn test_search_and_csv_output() {
    let world = TestWorld::new();

    let result = world
        .run(&["list", "--search", "MINT", "--format", "csv"])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines[0], "id,name,group,color,image_url,description");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("bean-004,Cool Mint,Mint,#98ff98,"));
    assert!(lines[2].starts_with("bean-010,Spearmint,Mint,"));
}

#[test]
fn test_plain_output_names_the_source() {
    let world = TestWorld::new();

    let result = world.run(&["list", "--desc"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    let first_row = result.stdout.lines().nth(1).unwrap();
    assert!(first_row.contains("Very Cherry"), "got: {}", first_row);
    assert!(result.stdout.ends_with("12 beans (source: bundled)\n"));
}

#[test]
fn test_synthetic_ids_follow_list_position() {
    let world = TestWorld::new();

    let result = world.run(&["list", "--search", "root", "--format", "csv"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    // The only match sits at index 0 of the filtered list
    assert!(result.stdout.contains("\nname-root-beer-0,Root Beer,"));
}
