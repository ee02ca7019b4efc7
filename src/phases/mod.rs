//! The generator phases of a seeding run.
//!
//! ## Overview
//!
//! A run walks through eleven phases in a fixed order:
//! 1. Utilities - `utils/util_NNN.js`
//! 2. Documentation - `docs/DOC_NNN.md`
//! 3. Tests - `test/unit/test_NNN.test.js`
//! 4. Components - `frontend/components/ComponentNNN.jsx`
//! 5. API routes - `api/routes/route_NNN.js`
//! 6. Configuration - `config/config_NNN.js`
//! 7. Middleware - `api/middleware/middleware_NNN.js`
//! 8. Models - `api/models/ModelNNN.js`
//! 9. Helpers - `scripts/helpers/helper_NNN.js`
//! 10. Hooks - `frontend/hooks/useNNN.js`
//! 11. Refinements - marker lines appended to a shared log file
//!
//! The first ten are content phases: each renders one file per index and
//! commits it. The eleventh is open-ended and runs until the commit target is
//! reached. `NNN` is the index padded to three digits.

use std::fmt;
use std::path::PathBuf;

use crate::message::CommitMessage;

// Phase modules
pub mod backend;
pub mod docs;
mod frontend;
pub mod orchestrator;
pub mod refinement;
mod scaffold;

/// Banner printed before the refinement phase starts.
pub const REFINEMENT_BANNER: &str = "Adding refinements and improvements";

/// One of the ten kinds of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Utilities,
    Documentation,
    Tests,
    Components,
    ApiRoutes,
    Configuration,
    Middleware,
    Models,
    Helpers,
    Hooks,
}

impl ContentKind {
    /// Every content kind, in run order.
    pub const ALL: [ContentKind; 10] = [
        ContentKind::Utilities,
        ContentKind::Documentation,
        ContentKind::Tests,
        ContentKind::Components,
        ContentKind::ApiRoutes,
        ContentKind::Configuration,
        ContentKind::Middleware,
        ContentKind::Models,
        ContentKind::Helpers,
        ContentKind::Hooks,
    ];

    /// The key used for this kind in `.commit-seeder.yaml`.
    pub fn key(&self) -> &'static str {
        match self {
            ContentKind::Utilities => "utilities",
            ContentKind::Documentation => "documentation",
            ContentKind::Tests => "tests",
            ContentKind::Components => "components",
            ContentKind::ApiRoutes => "api_routes",
            ContentKind::Configuration => "configuration",
            ContentKind::Middleware => "middleware",
            ContentKind::Models => "models",
            ContentKind::Helpers => "helpers",
            ContentKind::Hooks => "hooks",
        }
    }

    pub fn banner(&self) -> &'static str {
        match self {
            ContentKind::Utilities => "Creating utility functions",
            ContentKind::Documentation => "Creating documentation",
            ContentKind::Tests => "Creating test files",
            ContentKind::Components => "Creating frontend components",
            ContentKind::ApiRoutes => "Creating API routes",
            ContentKind::Configuration => "Creating configuration files",
            ContentKind::Middleware => "Creating middleware",
            ContentKind::Models => "Creating models",
            ContentKind::Helpers => "Creating helper functions",
            ContentKind::Hooks => "Creating custom hooks",
        }
    }

    /// Directory, relative to the working tree, that holds this kind's files.
    pub fn directory(&self) -> &'static str {
        match self {
            ContentKind::Utilities => "utils",
            ContentKind::Documentation => "docs",
            ContentKind::Tests => "test/unit",
            ContentKind::Components => "frontend/components",
            ContentKind::ApiRoutes => "api/routes",
            ContentKind::Configuration => "config",
            ContentKind::Middleware => "api/middleware",
            ContentKind::Models => "api/models",
            ContentKind::Helpers => "scripts/helpers",
            ContentKind::Hooks => "frontend/hooks",
        }
    }

    /// How many files a default run generates for this kind.
    pub fn default_count(&self) -> u32 {
        match self {
            ContentKind::Utilities => 50,
            ContentKind::Documentation => 75,
            ContentKind::Tests => 80,
            ContentKind::Components => 70,
            ContentKind::ApiRoutes => 60,
            ContentKind::Configuration => 30,
            ContentKind::Middleware => 30,
            ContentKind::Models => 30,
            ContentKind::Helpers => 30,
            ContentKind::Hooks => 25,
        }
    }

    pub fn file_name(&self, index: u32) -> String {
        match self {
            ContentKind::Utilities => format!("util_{index:03}.js"),
            ContentKind::Documentation => format!("DOC_{index:03}.md"),
            ContentKind::Tests => format!("test_{index:03}.test.js"),
            ContentKind::Components => format!("{}.jsx", frontend::component_name(index)),
            ContentKind::ApiRoutes => format!("route_{index:03}.js"),
            ContentKind::Configuration => format!("config_{index:03}.js"),
            ContentKind::Middleware => format!("middleware_{index:03}.js"),
            ContentKind::Models => format!("{}.js", backend::model_name(index)),
            ContentKind::Helpers => format!("helper_{index:03}.js"),
            ContentKind::Hooks => format!("{}.js", frontend::hook_name(index)),
        }
    }

    /// Path of the file for `index`, relative to the working tree.
    pub fn path(&self, index: u32) -> PathBuf {
        PathBuf::from(self.directory()).join(self.file_name(index))
    }

    /// Render the file for `index` along with its commit message.
    pub fn render(&self, index: u32) -> Artifact {
        let (content, message) = match self {
            ContentKind::Utilities => scaffold::utility(index),
            ContentKind::Documentation => docs::page(index),
            ContentKind::Tests => scaffold::test_suite(index),
            ContentKind::Components => frontend::component(index),
            ContentKind::ApiRoutes => backend::api_route(index),
            ContentKind::Configuration => scaffold::configuration(index),
            ContentKind::Middleware => backend::middleware(index),
            ContentKind::Models => backend::model(index),
            ContentKind::Helpers => scaffold::helper(index),
            ContentKind::Hooks => frontend::hook(index),
        };

        Artifact {
            path: self.path(index),
            content,
            message,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A rendered file, ready to be written and committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the working tree
    pub path: PathBuf,
    pub content: String,
    pub message: CommitMessage,
}

/// A content phase with the number of files it generates (indices `1..=count`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPhase {
    pub kind: ContentKind,
    pub count: u32,
}

/// The ordered phases and commit target of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub phases: Vec<ContentPhase>,
    pub target: u32,
}

impl RunPlan {
    /// The default plan: every content kind at its default count.
    pub fn new(target: u32) -> Self {
        Self {
            phases: ContentKind::ALL
                .iter()
                .map(|&kind| ContentPhase {
                    kind,
                    count: kind.default_count(),
                })
                .collect(),
            target,
        }
    }

    /// Total files the content phases would generate if the target allowed.
    pub fn content_total(&self) -> u32 {
        self.phases.iter().map(|p| p.count).sum()
    }

    /// How many of a phase's files fit under the target, assuming every
    /// earlier commit succeeds. Returns one entry per phase, in order.
    pub fn effective_counts(&self) -> Vec<u32> {
        let mut remaining = self.target;
        self.phases
            .iter()
            .map(|p| {
                let used = p.count.min(remaining);
                remaining -= used;
                used
            })
            .collect()
    }

    /// Refinement commits needed to reach the target once content is done.
    pub fn refinement_commits(&self) -> u32 {
        self.target.saturating_sub(self.content_total())
    }
}
