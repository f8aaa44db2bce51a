use remap_mock::{LoaderCall, MapBuilder, MockLoader, MockLoaderError};
use sourcemap_remap::{
    from_fn, remap, LoadedSource, LoaderContext, RemapError, RemapOptions,
};

#[test]
fn test_loader_context_tracks_importers() {
    let root = MapBuilder::new().mapping(0, 0, "dist/bundle.js", 0, 0);
    let bundle = MapBuilder::new()
        .mapping(0, 0, "../src/a.ts", 0, 0)
        .mapping(1, 0, "../src/b.ts", 0, 0);

    let mut loader = MockLoader::new().with_map("dist/bundle.js", bundle.input());
    remap(root.input(), &mut loader, &RemapOptions::default()).unwrap();

    assert_eq!(
        loader.calls(),
        &[
            LoaderCall {
                source: "dist/bundle.js".to_string(),
                importer: String::new(),
                depth: 0,
            },
            LoaderCall {
                source: "src/a.ts".to_string(),
                importer: "dist/bundle.js".to_string(),
                depth: 1,
            },
            LoaderCall {
                source: "src/b.ts".to_string(),
                importer: "dist/bundle.js".to_string(),
                depth: 1,
            },
        ]
    );
}

#[test]
fn test_renamed_map_source_becomes_importer() {
    let root = MapBuilder::new().mapping(0, 0, "bundle.js", 0, 0);
    let bundle = MapBuilder::new().mapping(0, 0, "a.ts", 0, 0);

    let mut loader = MockLoader::new()
        .with_map("bundle.js", bundle.input())
        .with_rename("bundle.js", "build/bundle.js");
    let map = remap(root.input(), &mut loader, &RemapOptions::default()).unwrap();

    assert_eq!(loader.calls()[1].importer, "build/bundle.js");
    assert_eq!(map.sources, vec!["build/a.ts"]);
}

#[test]
fn test_loader_error_is_returned_unchanged() {
    let root = MapBuilder::new()
        .mapping(0, 0, "ok.js", 0, 0)
        .mapping(0, 4, "broken.js", 0, 0);
    let mut loader = MockLoader::new().failing_on("broken.js");

    let err = remap(root.input(), &mut loader, &RemapOptions::default()).unwrap_err();

    let RemapError::Loader(inner) = err else {
        panic!("expected a loader error");
    };
    assert!(matches!(
        inner.downcast_ref::<MockLoaderError>(),
        Some(MockLoaderError::Refused(source)) if source == "broken.js"
    ));
}

#[test]
fn test_cycle_is_cut_at_max_depth() {
    let a = MapBuilder::new().mapping(0, 0, "b.js", 0, 0);
    let b = MapBuilder::new().mapping(0, 0, "a.js", 0, 0);
    let mut loader = MockLoader::new()
        .with_map("a.js", a.input())
        .with_map("b.js", b.input());

    let options = RemapOptions {
        max_depth: 10,
        ..RemapOptions::default()
    };
    let root = MapBuilder::new().mapping(0, 0, "a.js", 0, 0);
    let err = remap(root.input(), &mut loader, &options).unwrap_err();

    assert!(matches!(err, RemapError::DepthExceeded { limit: 10, .. }));
    assert_eq!(loader.calls().len(), 11);
}

#[test]
fn test_closure_loader_with_json_maps() {
    let root = MapBuilder::new().mapping(0, 0, "bundle.js", 0, 0).to_json();
    let bundle = MapBuilder::new().mapping(0, 0, "main.ts", 2, 2).to_json();

    let mut loader = from_fn(|source: &str, _: &LoaderContext<'_>| {
        Ok(if source == "bundle.js" {
            LoadedSource::map(bundle.as_str())
        } else {
            LoadedSource::original().with_content(Some(format!("// {}", source)))
        })
    });
    let map = remap(root.as_str(), &mut loader, &RemapOptions::default()).unwrap();

    assert_eq!(map.sources, vec!["main.ts"]);
    assert_eq!(map.sources_content, Some(vec![Some("// main.ts".to_string())]));
}
