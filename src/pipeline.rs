//! Build-pipeline wiring, ported as declarative data.
//!
//! Describes what the bundler does (entry, output naming, static-asset
//! copy rules, dev server) without implementing any of it. Pipeline
//! behavior itself is external, already-correct tooling.

use serde::Serialize;

/// Build mode the bundle is produced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

/// A static-asset copy rule: everything under `from` lands under `to` in
/// the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CopyRule {
    pub from: &'static str,
    pub to: &'static str,
}

/// Development server settings. Absent in production builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DevServerConfig {
    pub port: u16,
    pub hot: bool,
    pub history_api_fallback: bool,
    pub static_dir: &'static str,
}

/// The bundler configuration for one build mode.
#[derive(Debug, Clone, Serialize)]
pub struct BundleConfig {
    pub mode: BuildMode,
    pub entry: &'static str,
    pub output_dir: &'static str,
    /// Output filename pattern; hashed in production for cache busting.
    pub output_filename: &'static str,
    pub public_path: Option<&'static str>,
    pub copy_rules: Vec<CopyRule>,
    pub dev_server: Option<DevServerConfig>,
}

const COPY_RULES: [CopyRule; 2] = [
    CopyRule {
        from: "src/static/img/",
        to: "static/img/",
    },
    CopyRule {
        from: "src/static/fonts/",
        to: "static/fonts/",
    },
];

impl BundleConfig {
    /// Configuration for local development: unhashed output, hot-reloading
    /// dev server on port 3000.
    pub fn development() -> Self {
        Self {
            mode: BuildMode::Development,
            entry: "src/static/index.js",
            output_dir: "dist",
            output_filename: "static/js/[name].js",
            public_path: None,
            copy_rules: COPY_RULES.to_vec(),
            dev_server: Some(DevServerConfig {
                port: 3000,
                hot: true,
                history_api_fallback: true,
                static_dir: "dist",
            }),
        }
    }

    /// Configuration for production builds: content-hashed filenames,
    /// `/static/` public path, no dev server.
    pub fn production() -> Self {
        Self {
            mode: BuildMode::Production,
            entry: "src/static/index.js",
            output_dir: "dist",
            output_filename: "static/js/[name]-[hash].js",
            public_path: Some("/static/"),
            copy_rules: COPY_RULES.to_vec(),
            dev_server: None,
        }
    }
}
