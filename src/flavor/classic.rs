//! create-react-app flavor (TypeScript template)

use super::{
    ConfigPatch, Flavor, FlavorProfile, InstallMode, PackageSet, StaticFile, Step, INDEX_CSS,
    TAILWIND_INIT,
};
use crate::process::Tool;

pub const PACKAGES: &[&str] = &[
    // Tailwind CSS
    "tailwindcss",
    "postcss",
    "autoprefixer",
    "@tailwindcss/forms",
    "@tailwindcss/typography",
    // UI and styling
    "react-router-dom",
    "axios",
    "styled-components",
    "@types/styled-components",
    "lucide-react",
    "clsx",
    "tailwind-merge",
    // State
    "zustand",
    "@tanstack/react-query",
    // Forms and validation
    "react-hook-form",
    "@hookform/resolvers",
    "zod",
    // Tooling
    "@types/node",
    "prettier",
    "prettier-plugin-tailwindcss",
];

pub const SCRIPTS: &[(&str, &str)] = &[
    ("format", "prettier --write ."),
    ("lint", "eslint src --ext .js,.jsx,.ts,.tsx"),
    ("build:prod", "npm run build"),
    ("dev", "npm start"),
];

const GENERATE: Step = Step {
    label: "📦 Running create-react-app with TypeScript...",
    tool: Tool::Npx,
    args: &["create-react-app", ".", "--template", "typescript"],
    // Silence the funding/adblock banners printed during install
    envs: &[("ADBLOCK", "1"), ("DISABLE_OPENCOLLECTIVE", "1")],
};

pub fn profile() -> FlavorProfile {
    FlavorProfile {
        flavor: Flavor::Classic,
        title: "React",
        generate: vec![GENERATE],
        packages: PackageSet {
            mode: InstallMode::Runtime,
            packages: PACKAGES,
        },
        post_install: vec![TAILWIND_INIT],
        files: vec![
            StaticFile {
                path: "src/hooks/useLocalStorage.ts",
                template: include_str!(
                    "../../resources/templates/react/classic/useLocalStorage.ts.tmpl"
                ),
            },
            StaticFile {
                path: "src/utils/helpers.ts",
                template: include_str!("../../resources/templates/react/classic/helpers.ts.tmpl"),
            },
            StaticFile {
                path: ".env.example",
                template: include_str!("../../resources/templates/react/classic/env.example.tmpl"),
            },
        ],
        patches: vec![
            ConfigPatch::Overwrite(StaticFile {
                path: "tailwind.config.js",
                template: include_str!(
                    "../../resources/templates/react/classic/tailwind.config.js.tmpl"
                ),
            }),
            ConfigPatch::Overwrite(INDEX_CSS),
            ConfigPatch::MergeScripts(SCRIPTS),
        ],
        start_command: "npm start",
        highlights: &[
            "Tailwind CSS with Forms & Typography",
            "React Router DOM",
            "Axios for API calls",
            "Zustand for state management",
            "React Query for server state",
            "React Hook Form + Zod for forms",
            "Lucide React for icons",
            "Prettier for formatting",
        ],
        farewell: "🎉 Happy coding with your enhanced React stack! 🚀",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Toolchain;
    use std::path::Path;

    #[test]
    fn test_generator_targets_current_dir() {
        let p = profile();
        assert_eq!(p.generate.len(), 1);
        let inv = p.generate[0].invocation(&Toolchain::default(), Path::new("my-app"));
        assert_eq!(inv.to_string(), "npx create-react-app . --template typescript");
        assert_eq!(inv.cwd, Path::new("my-app"));
        assert!(inv
            .envs
            .contains(&("DISABLE_OPENCOLLECTIVE".to_string(), "1".to_string())));
    }

    #[test]
    fn test_packages_are_runtime_dependencies() {
        let p = profile();
        assert_eq!(p.packages.mode, InstallMode::Runtime);
        assert_eq!(p.packages.packages.len(), 20);
        assert!(p.packages.packages.contains(&"@types/styled-components"));
    }

    #[test]
    fn test_env_example_uses_react_app_prefix() {
        let env = profile()
            .files
            .iter()
            .find(|f| f.path == ".env.example")
            .map(|f| f.render("my-app"))
            .unwrap();
        assert!(env.contains("REACT_APP_NAME=my-app"));
        assert!(env.lines().all(|l| l.starts_with("REACT_APP_")));
    }

    #[test]
    fn test_tailwind_config_is_commonjs() {
        let p = profile();
        let tailwind = p
            .patches
            .iter()
            .find_map(|patch| match patch {
                ConfigPatch::Overwrite(file) if file.path == "tailwind.config.js" => Some(file),
                _ => None,
            })
            .unwrap();
        assert!(tailwind.template.contains("module.exports"));
    }
}
