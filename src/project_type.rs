//! Project types, their boilerplate bundles and detection for existing projects.

use std::{convert::Infallible, fmt::Display, fs, path::Path, str::FromStr};

/// Hint selecting which boilerplate bundle a new project receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectType {
    Typescript,
    Python,
    React,
    Nodejs,
    /// Only produced by detection; bundles like `Generic`.
    Rust,
    /// Only produced by detection; bundles like `Generic`.
    Go,
    Generic,
    /// Any other `--type` value. Accepted without complaint and bundled like
    /// `Generic`; the raw value is still recorded in the config.
    Unrecognized(String),
}

/// The boilerplate set emitted for a project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bundle {
    Typescript,
    Nodejs,
    React,
    Python,
    Generic,
}

impl ProjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectType::Typescript => "typescript",
            ProjectType::Python => "python",
            ProjectType::React => "react",
            ProjectType::Nodejs => "nodejs",
            ProjectType::Rust => "rust",
            ProjectType::Go => "go",
            ProjectType::Generic => "generic",
            ProjectType::Unrecognized(raw) => raw,
        }
    }

    pub fn bundle(&self) -> Bundle {
        match self {
            ProjectType::Typescript => Bundle::Typescript,
            ProjectType::Nodejs => Bundle::Nodejs,
            ProjectType::React => Bundle::React,
            ProjectType::Python => Bundle::Python,
            ProjectType::Rust
            | ProjectType::Go
            | ProjectType::Generic
            | ProjectType::Unrecognized(_) => Bundle::Generic,
        }
    }

    /// Interprets a `--type` value. Unknown values are kept verbatim.
    pub fn from_flag(s: &str) -> ProjectType {
        match s {
            "typescript" => ProjectType::Typescript,
            "python" => ProjectType::Python,
            "react" => ProjectType::React,
            "nodejs" => ProjectType::Nodejs,
            "generic" => ProjectType::Generic,
            other => ProjectType::Unrecognized(other.to_string()),
        }
    }

    /// Inspects an existing project directory and guesses its type.
    ///
    /// `package.json` wins over every other marker and is sniffed for React
    /// and TypeScript; Python, Rust and Go are recognized by their manifests.
    pub fn detect<P: AsRef<Path>>(root: P) -> ProjectType {
        let root = root.as_ref();

        let package_json = root.join("package.json");
        if package_json.is_file() {
            let content = fs::read_to_string(&package_json).unwrap_or_else(|e| {
                log::warn!("Failed to read '{}': {e}", package_json.display());
                String::new()
            });
            return if content.contains("\"react\"") {
                ProjectType::React
            } else if content.contains("typescript") || root.join("tsconfig.json").exists()
            {
                ProjectType::Typescript
            } else {
                ProjectType::Nodejs
            };
        }

        if ["requirements.txt", "setup.py", "pyproject.toml"]
            .iter()
            .any(|marker| root.join(marker).exists())
        {
            return ProjectType::Python;
        }

        if root.join("Cargo.toml").exists() {
            return ProjectType::Rust;
        }

        if root.join("go.mod").exists() {
            return ProjectType::Go;
        }

        ProjectType::Generic
    }
}

impl FromStr for ProjectType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ProjectType::from_flag(s))
    }
}

impl Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
