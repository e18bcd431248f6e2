//! Scaffold manifests: the fixed file tree generated for each project type

use crate::project::ProjectType;
use crate::templates::render::render;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A directory to create, relative to the project root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectorySpec {
    /// `/`-separated path
    pub path: &'static str,
}

/// A file to write, relative to the project root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSpec {
    /// `/`-separated path
    pub path: &'static str,

    /// Content with [`NAME_TOKEN`](crate::templates::render::NAME_TOKEN) placeholders
    pub template: &'static str,
}

impl FileSpec {
    /// Render this file's content for a project name
    pub fn render(&self, name: &str) -> String {
        render(self.template, name)
    }
}

/// One step of a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestEntry {
    Directory(DirectorySpec),
    File(FileSpec),
}

impl ManifestEntry {
    pub fn path(&self) -> &'static str {
        match self {
            ManifestEntry::Directory(dir) => dir.path,
            ManifestEntry::File(file) => file.path,
        }
    }
}

/// Ordered directories and files for one project type
#[derive(Debug)]
pub struct ScaffoldManifest {
    pub project_type: ProjectType,
    pub entries: &'static [ManifestEntry],
}

impl ScaffoldManifest {
    pub fn directories(&self) -> impl Iterator<Item = &DirectorySpec> {
        self.entries.iter().filter_map(|entry| match entry {
            ManifestEntry::Directory(dir) => Some(dir),
            ManifestEntry::File(_) => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = &FileSpec> {
        self.entries.iter().filter_map(|entry| match entry {
            ManifestEntry::File(file) => Some(file),
            ManifestEntry::Directory(_) => None,
        })
    }

    /// Describe what generating `name` would create, without touching disk
    pub fn plan(&self, name: &str) -> ManifestPlan {
        ManifestPlan {
            name: name.to_string(),
            project_type: self.project_type,
            entries: self
                .entries
                .iter()
                .map(|entry| match entry {
                    ManifestEntry::Directory(dir) => PlannedEntry::Directory {
                        path: dir.path.to_string(),
                    },
                    ManifestEntry::File(file) => PlannedEntry::File {
                        path: file.path.to_string(),
                        bytes: file.render(name).len(),
                    },
                })
                .collect(),
        }
    }
}

/// Serializable preview of a generation, used for dry runs
#[derive(Debug, Clone, Serialize)]
pub struct ManifestPlan {
    pub name: String,
    pub project_type: ProjectType,
    pub entries: Vec<PlannedEntry>,
}

impl ManifestPlan {
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlannedEntry {
    Directory { path: String },
    File { path: String, bytes: usize },
}

/// Select the manifest for a type identifier, falling back to the default type
pub fn select_manifest(project_type: &str) -> &'static ScaffoldManifest {
    ProjectType::resolve(project_type).manifest()
}

/// Join a `/`-separated manifest path onto `root` using platform separators
pub fn resolve_path(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

const fn dir(path: &'static str) -> ManifestEntry {
    ManifestEntry::Directory(DirectorySpec { path })
}

const fn file(path: &'static str, template: &'static str) -> ManifestEntry {
    ManifestEntry::File(FileSpec { path, template })
}

/// Cobra command line application (the default type)
pub static CLI: ScaffoldManifest = ScaffoldManifest {
    project_type: ProjectType::Cli,
    entries: &[
        dir("cmd"),
        dir("internal"),
        file("main.go", include_str!("../../templates/cli/main.go.tmpl")),
        file("cmd/root.go", include_str!("../../templates/cli/cmd/root.go.tmpl")),
        file("cmd/version.go", include_str!("../../templates/cli/cmd/version.go.tmpl")),
        file("Makefile", include_str!("../../templates/cli/Makefile.tmpl")),
        file(".gitignore", include_str!("../../templates/cli/.gitignore.tmpl")),
        file("README.md", include_str!("../../templates/cli/README.md.tmpl")),
        file("go.mod", include_str!("../../templates/cli/go.mod.tmpl")),
    ],
};

/// net/http web server with templates and static assets
pub static WEB: ScaffoldManifest = ScaffoldManifest {
    project_type: ProjectType::Web,
    entries: &[
        dir("cmd"),
        dir("handlers"),
        dir("static/css"),
        dir("static/js"),
        dir("templates"),
        file("cmd/main.go", include_str!("../../templates/web/cmd/main.go.tmpl")),
        file("handlers/home.go", include_str!("../../templates/web/handlers/home.go.tmpl")),
        file(
            "templates/index.html",
            include_str!("../../templates/web/templates/index.html.tmpl"),
        ),
        file(
            "static/css/style.css",
            include_str!("../../templates/web/static/css/style.css.tmpl"),
        ),
        file("static/js/main.js", include_str!("../../templates/web/static/js/main.js.tmpl")),
        file(".gitignore", include_str!("../../templates/web/.gitignore.tmpl")),
        file("README.md", include_str!("../../templates/web/README.md.tmpl")),
        file("go.mod", include_str!("../../templates/web/go.mod.tmpl")),
    ],
};

/// JSON REST API with logging and CORS middleware
pub static API: ScaffoldManifest = ScaffoldManifest {
    project_type: ProjectType::Api,
    entries: &[
        dir("cmd"),
        dir("handlers"),
        dir("models"),
        dir("middleware"),
        file("cmd/main.go", include_str!("../../templates/api/cmd/main.go.tmpl")),
        file("handlers/health.go", include_str!("../../templates/api/handlers/health.go.tmpl")),
        file("handlers/users.go", include_str!("../../templates/api/handlers/users.go.tmpl")),
        file("models/user.go", include_str!("../../templates/api/models/user.go.tmpl")),
        file("middleware/logger.go", include_str!("../../templates/api/middleware/logger.go.tmpl")),
        file("middleware/cors.go", include_str!("../../templates/api/middleware/cors.go.tmpl")),
        file(".gitignore", include_str!("../../templates/api/.gitignore.tmpl")),
        file("README.md", include_str!("../../templates/api/README.md.tmpl")),
        file("go.mod", include_str!("../../templates/api/go.mod.tmpl")),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn file_paths(manifest: &ScaffoldManifest) -> Vec<&'static str> {
        manifest.files().map(|f| f.path).collect()
    }

    fn find<'a>(manifest: &'a ScaffoldManifest, path: &str) -> &'a FileSpec {
        manifest
            .files()
            .find(|f| f.path == path)
            .unwrap_or_else(|| panic!("{} not in {} manifest", path, manifest.project_type))
    }

    #[test]
    fn test_cli_file_list() {
        assert_eq!(
            file_paths(&CLI),
            vec![
                "main.go",
                "cmd/root.go",
                "cmd/version.go",
                "Makefile",
                ".gitignore",
                "README.md",
                "go.mod"
            ]
        );
    }

    #[test]
    fn test_web_file_list() {
        assert_eq!(
            file_paths(&WEB),
            vec![
                "cmd/main.go",
                "handlers/home.go",
                "templates/index.html",
                "static/css/style.css",
                "static/js/main.js",
                ".gitignore",
                "README.md",
                "go.mod"
            ]
        );
    }

    #[test]
    fn test_api_file_list() {
        assert_eq!(
            file_paths(&API),
            vec![
                "cmd/main.go",
                "handlers/health.go",
                "handlers/users.go",
                "models/user.go",
                "middleware/logger.go",
                "middleware/cors.go",
                ".gitignore",
                "README.md",
                "go.mod"
            ]
        );
    }

    #[test]
    fn test_manifest_type_matches_registry() {
        for project_type in ProjectType::ALL {
            assert_eq!(project_type.manifest().project_type, project_type);
        }
    }

    #[test]
    fn test_every_file_parent_is_declared_first() {
        for project_type in ProjectType::ALL {
            let manifest = project_type.manifest();
            let mut declared: Vec<&str> = Vec::new();
            for entry in manifest.entries {
                match entry {
                    ManifestEntry::Directory(dir) => declared.push(dir.path),
                    ManifestEntry::File(file) => {
                        if let Some((parent, _)) = file.path.rsplit_once('/') {
                            assert!(
                                declared.contains(&parent),
                                "{}: {} written before {} is created",
                                project_type,
                                file.path,
                                parent
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_select_manifest_falls_back_to_cli() {
        assert!(std::ptr::eq(select_manifest("unrecognized-value"), &CLI));
        assert!(std::ptr::eq(select_manifest(""), &CLI));
        assert!(std::ptr::eq(select_manifest("cli"), &CLI));
        assert!(std::ptr::eq(select_manifest("web"), &WEB));
        assert!(std::ptr::eq(select_manifest("api"), &API));
    }

    #[test]
    fn test_go_mod_declares_name_verbatim() {
        for project_type in ProjectType::ALL {
            let go_mod = find(project_type.manifest(), "go.mod").render("My Project");
            assert!(go_mod.starts_with("module My Project\n\ngo 1.21\n"));
        }
    }

    #[test]
    fn test_cli_go_mod_requires_cobra() {
        let go_mod = find(&CLI, "go.mod").render("demo");
        assert!(go_mod.contains("require github.com/spf13/cobra v1.8.0"));
    }

    #[test]
    fn test_import_paths_use_name() {
        assert!(find(&CLI, "main.go").render("demo").contains("import \"demo/cmd\""));
        assert!(find(&WEB, "cmd/main.go").render("demo").contains("\"demo/handlers\""));

        let api_main = find(&API, "cmd/main.go").render("demo");
        assert!(api_main.contains("\"demo/handlers\""));
        assert!(api_main.contains("\"demo/middleware\""));
        assert!(find(&API, "handlers/users.go").render("demo").contains("\"demo/models\""));
    }

    #[test]
    fn test_makefile_keeps_tab_indentation() {
        let makefile = find(&CLI, "Makefile").render("demo");
        assert!(makefile.contains("build:\n\tgo build -o demo .\n"));
        assert!(makefile.contains(".PHONY: build run test clean install"));
    }

    #[test]
    fn test_index_html_keeps_go_template_fields() {
        let html = find(&WEB, "templates/index.html").render("demo");
        assert!(html.contains("<title>{{.Title}}</title>"));
        assert!(!html.contains("demo"));
    }

    #[test]
    fn test_no_token_left_after_render() {
        for project_type in ProjectType::ALL {
            for file in project_type.manifest().files() {
                assert!(!file.render("demo").contains("{{name}}"), "{}", file.path);
            }
        }
    }

    #[test]
    fn test_plan_follows_manifest_order() {
        let plan = WEB.plan("demo");
        assert_eq!(plan.project_type, ProjectType::Web);
        assert_eq!(plan.entries.len(), WEB.entries.len());
        assert_eq!(
            plan.entries[2],
            PlannedEntry::Directory {
                path: "static/css".to_string()
            }
        );
        let go_mod_bytes = find(&WEB, "go.mod").render("demo").len();
        assert_eq!(
            plan.entries.last(),
            Some(&PlannedEntry::File {
                path: "go.mod".to_string(),
                bytes: go_mod_bytes
            })
        );
    }

    #[test]
    fn test_plan_yaml() {
        let yaml = API.plan("demo").to_yaml().unwrap();
        assert!(yaml.contains("project_type: api"));
        assert!(yaml.contains("kind: directory"));
        assert!(yaml.contains("path: middleware/cors.go"));
    }

    #[test]
    fn test_resolve_path_uses_platform_separators() {
        let path = resolve_path(Path::new("demo"), "static/css/style.css");
        assert_eq!(path, Path::new("demo").join("static").join("css").join("style.css"));
    }
}
