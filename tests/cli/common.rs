use remap_mock::MapBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper struct for managing test resources
pub struct TestContext {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with a temporary directory
    pub fn new() -> Result<Self, std::io::Error> {
        let temp_dir = TempDir::new()?;
        Ok(TestContext { temp_dir })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name`, creating parent directories.
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf, std::io::Error> {
        let file_path = self.path().join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Lay out `dist/app.min.js.map -> dist/app.js.map -> src/app.ts`.
    ///
    /// Returns the path of the minified map.
    pub fn create_project(&self) -> Result<PathBuf, std::io::Error> {
        let minified = MapBuilder::new()
            .file("app.min.js")
            .named_mapping(0, 12, "app.js", 4, 2, "render")
            .to_json();
        let transpiled = MapBuilder::new()
            .file("app.js")
            .mapping(4, 0, "../src/app.ts", 7, 0)
            .to_json();

        self.create_file("dist/app.js.map", &transpiled)?;
        self.create_file("src/app.ts", "export const app = 1;\n")?;
        self.create_file("dist/app.min.js.map", &minified)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new().expect("Failed to create test context")
    }
}

/// Get the sourcemap-remap command, isolated from the caller's config and colors.
#[allow(deprecated)]
pub fn cmd(ctx: &TestContext) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("sourcemap-remap")
        .expect("Failed to find sourcemap-remap binary");
    cmd.current_dir(ctx.path())
        .env("NO_COLOR", "1")
        .env_remove("SOURCEMAP_REMAP_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("REMAP_LOG_JSON");
    cmd
}

/// Validate JSON output string
pub fn parse_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout should be valid JSON")
}
