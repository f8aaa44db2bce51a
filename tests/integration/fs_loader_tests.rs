use remap_mock::{MapAssertions, MapBuilder};
use sourcemap_remap::loader::FsLoader;
use sourcemap_remap::{remap, RemapOptions};
use std::fs;
use tempfile::TempDir;

/// Lay out `dist/app.min.js.map -> dist/app.js.map -> src/app.ts` on disk.
fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("dist")).unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();

    let minified = MapBuilder::new()
        .file("app.min.js")
        .mapping(0, 12, "app.js", 4, 2)
        .to_json();
    let transpiled = MapBuilder::new()
        .file("app.js")
        .mapping(4, 0, "../src/app.ts", 7, 0)
        .to_json();

    fs::write(dir.path().join("dist/app.min.js.map"), minified).unwrap();
    fs::write(dir.path().join("dist/app.js.map"), transpiled).unwrap();
    fs::write(dir.path().join("src/app.ts"), "export const app = 1;\n").unwrap();
    dir
}

#[test]
fn test_follows_maps_on_disk() {
    let dir = project();
    let input = fs::read_to_string(dir.path().join("dist/app.min.js.map")).unwrap();

    let mut loader = FsLoader::new(dir.path().join("dist"));
    let map = remap(input, &mut loader, &RemapOptions::default()).unwrap();

    assert_eq!(map.sources, vec!["../src/app.ts"]);
    MapAssertions::new(&map).assert_traces_to(0, 12, "../src/app.ts", 7, 0);
    MapAssertions::new(&map).assert_content("../src/app.ts", None);
}

#[test]
fn test_reads_original_content_when_asked() {
    let dir = project();
    let input = fs::read_to_string(dir.path().join("dist/app.min.js.map")).unwrap();

    let mut loader = FsLoader::new(dir.path().join("dist")).read_content(true);
    let map = remap(input, &mut loader, &RemapOptions::default()).unwrap();

    MapAssertions::new(&map).assert_content("../src/app.ts", Some("export const app = 1;\n"));
}
