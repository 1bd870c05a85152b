//! Vite flavor (React template, JavaScript)

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
    "prettier",
    "prettier-plugin-tailwindcss",
];

// `dev` keeps pointing at vite; the template has no `start` script.
pub const SCRIPTS: &[(&str, &str)] = &[
    ("format", "prettier --write ."),
    ("lint", "eslint src --ext .js,.jsx"),
    ("build:prod", "npm run build"),
    ("dev", "vite"),
];

const GENERATE: &[Step] = &[
    Step {
        label: "📦 Creating Vite + React app...",
        tool: Tool::Npm,
        args: &["create", "vite@latest", ".", "--", "--template", "react"],
        envs: &[],
    },
    Step {
        label: "📦 Installing dependencies...",
        tool: Tool::Npm,
        args: &["install"],
        envs: &[],
    },
];

pub fn profile() -> FlavorProfile {
    FlavorProfile {
        flavor: Flavor::Vite,
        title: "Vite + React",
        generate: GENERATE.to_vec(),
        packages: PackageSet {
            mode: InstallMode::Dev,
            packages: PACKAGES,
        },
        post_install: vec![TAILWIND_INIT],
        files: vec![
            StaticFile {
                path: "src/components/ui/Button.jsx",
                template: include_str!("../../resources/templates/react/vite/Button.jsx.tmpl"),
            },
            StaticFile {
                path: "src/pages/About.jsx",
                template: include_str!("../../resources/templates/react/vite/About.jsx.tmpl"),
            },
            StaticFile {
                path: "src/pages/Contact.jsx",
                template: include_str!("../../resources/templates/react/vite/Contact.jsx.tmpl"),
            },
            StaticFile {
                path: "src/pages/Home.jsx",
                template: include_str!("../../resources/templates/react/vite/Home.jsx.tmpl"),
            },
            StaticFile {
                path: "src/pages/index.js",
                template: include_str!("../../resources/templates/react/vite/pages-index.js.tmpl"),
            },
            StaticFile {
                path: "src/hooks/useLocalStorage.js",
                template: include_str!(
                    "../../resources/templates/react/vite/useLocalStorage.js.tmpl"
                ),
            },
            StaticFile {
                path: ".env.example",
                template: include_str!("../../resources/templates/react/vite/env.example.tmpl"),
            },
            StaticFile {
                path: "src/App.jsx",
                template: include_str!("../../resources/templates/react/vite/App.jsx.tmpl"),
            },
        ],
        patches: vec![
            ConfigPatch::Overwrite(StaticFile {
                path: "tailwind.config.js",
                template: include_str!(
                    "../../resources/templates/react/vite/tailwind.config.js.tmpl"
                ),
            }),
            ConfigPatch::Overwrite(StaticFile {
                path: "postcss.config.js",
                template: include_str!(
                    "../../resources/templates/react/vite/postcss.config.js.tmpl"
                ),
            }),
            ConfigPatch::Overwrite(StaticFile {
                path: "vite.config.js",
                template: include_str!("../../resources/templates/react/vite/vite.config.js.tmpl"),
            }),
            ConfigPatch::Overwrite(INDEX_CSS),
            ConfigPatch::MergeScripts(SCRIPTS),
        ],
        start_command: "npm run dev",
        highlights: &[
            "⚡ Vite (fast build tool)",
            "⚛️  React",
            "🎨 Tailwind CSS with plugins",
            "🛣️  React Router DOM",
            "🐻 Zustand (state management)",
            "📡 React Query (server state)",
            "📝 React Hook Form + Zod",
            "🔮 Lucide React (icons)",
            "🎯 Axios (HTTP client)",
        ],
        farewell: "🎉 Happy coding with Vite + React! 🚀",
    }
}
