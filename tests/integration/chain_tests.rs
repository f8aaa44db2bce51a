use remap_mock::{MapAssertions, MapBuilder, MockLoader};
use sourcemap_remap::{remap, remap_chain, RemapError, RemapOptions};

/// A map over `lines` x `columns` that shifts every position by one line and
/// `shift` columns into `source`.
fn shifted(source: &str, lines: u32, columns: u32, shift: u32) -> MapBuilder {
    let mut builder = MapBuilder::new();
    for line in 0..lines {
        for column in 0..columns {
            builder = builder.mapping(line, column, source, line + 1, column + shift);
        }
    }
    builder
}

#[test]
fn test_three_layer_shift_composition() {
    let root = shifted("a.js", 1, 10, 1).file("out.js");
    let mut loader = MockLoader::new()
        .with_map("a.js", shifted("b.js", 3, 20, 2).input())
        .with_map("b.js", shifted("c.ts", 4, 30, 3).input());

    let map = remap(root.input(), &mut loader, &RemapOptions::default()).unwrap();

    assert_eq!(map.sources, vec!["c.ts"]);
    let assertions = MapAssertions::new(&map);
    for column in 0..10 {
        // +1 line per layer, +1 +2 +3 columns
        assertions.assert_traces_to(0, column, "c.ts", 3, column + 6);
    }
    assert_eq!(
        loader.calls().iter().map(|call| call.depth).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

#[test]
fn test_transformation_chain_most_recent_first() {
    let minify = MapBuilder::new()
        .file("app.min.js")
        .named_mapping(0, 61, "app.js", 2, 20, "alert");
    let transpile = MapBuilder::new()
        .file("app.js")
        .mapping(2, 20, "app.ts", 9, 5)
        .content("app.ts", "alert('hi')");

    let map = remap_chain(
        vec![minify.input(), transpile.input()],
        &mut MockLoader::new(),
        &RemapOptions::default(),
    )
    .unwrap();

    let assertions = MapAssertions::new(&map);
    assertions.assert_traces_to(0, 61, "app.ts", 9, 5);
    assertions.assert_name(0, 61, Some("alert"));
    assertions.assert_content("app.ts", Some("alert('hi')"));
    assert_eq!(map.file.as_deref(), Some("app.min.js"));
}

#[test]
fn test_chain_and_loader_compose() {
    let minify = MapBuilder::new().mapping(0, 4, "bundle.js", 1, 0);
    let bundle = MapBuilder::new().mapping(1, 0, "entry.js", 3, 3);
    let entry = MapBuilder::new().mapping(3, 0, "entry.ts", 6, 1);

    let mut loader = MockLoader::new().with_map("entry.js", entry.input());
    let map = remap_chain(
        vec![minify.input(), bundle.input()],
        &mut loader,
        &RemapOptions::default(),
    )
    .unwrap();

    MapAssertions::new(&map).assert_traces_to(0, 4, "entry.ts", 6, 1);
    // Transformation maps are never handed to the loader.
    assert_eq!(loader.requested_sources(), vec!["entry.js", "entry.ts"]);
}

#[test]
fn test_gap_in_transformation_map_falls_back_to_its_input() {
    let minify = MapBuilder::new()
        .mapping(0, 0, "bundle.js", 0, 0)
        .mapping(0, 9, "bundle.js", 4, 0)
        .content("bundle.js", "bundle source");
    let bundle = MapBuilder::new().mapping(0, 0, "src.ts", 0, 0);

    let map = remap_chain(
        vec![minify.input(), bundle.input()],
        &mut MockLoader::new(),
        &RemapOptions::default(),
    )
    .unwrap();

    let assertions = MapAssertions::new(&map);
    assertions.assert_traces_to(0, 9, "bundle.js", 4, 0);
    assertions.assert_content("bundle.js", Some("bundle source"));
}

#[test]
fn test_reversed_chain_is_rejected() {
    let minify = MapBuilder::new().mapping(0, 0, "bundle.js", 0, 0);
    let bundle = MapBuilder::new()
        .mapping(0, 0, "a.ts", 0, 0)
        .mapping(1, 0, "b.ts", 0, 0);

    let err = remap_chain(
        vec![bundle.input(), minify.input()],
        &mut MockLoader::new(),
        &RemapOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        RemapError::InvalidTransformationMap {
            index: 0,
            sources: 2
        }
    ));
}

#[test]
fn test_empty_chain_is_rejected() {
    let err = remap_chain(vec![], &mut MockLoader::new(), &RemapOptions::default()).unwrap_err();
    assert!(matches!(err, RemapError::EmptyInput));
}
