//! The layout recipes.
//!
//! Each recipe is a plain options struct with sensible defaults and a
//! [`Recipe`] implementation that turns those options into a [`StyleSheet`].
//! Rendering never fails; options that can be inconsistent are checked by
//! [`Recipe::validate`].
//!
//! | Slug        | Type          | Default class   |
//! |-------------|---------------|-----------------|
//! | `stack`     | [`Stack`]     | `.stack`        |
//! | `box`       | [`Boxed`]     | `.box`          |
//! | `grid`      | [`Grid`]      | `.grid`         |
//! | `cluster`   | [`Cluster`]   | `.cluster`      |
//! | `cover`     | [`Cover`]     | `.cover`        |
//! | `sidebar`   | [`Sidebar`]   | `.with-sidebar` |
//! | `switcher`  | [`Switcher`]  | `.switcher`     |
//! | `frame`     | [`Frame`]     | `.frame`        |
//! | `reel`      | [`Reel`]      | `.reel`         |
//! | `imposter`  | [`Imposter`]  | `.imposter`     |
//! | `subgrid`   | [`Subgrid`]   | `.subgrid`      |
//! | `icon`      | [`Icon`]      | `.icon`         |
//! | `container` | [`Container`] | `.container`    |
//! | `grid-area` | [`GridArea`]  | `.grid-area`    |

pub mod boxed;
pub mod cluster;
pub mod container;
pub mod cover;
pub mod frame;
pub mod grid;
pub mod grid_area;
pub mod icon;
pub mod imposter;
pub mod reel;
pub mod sidebar;
pub mod stack;
pub mod subgrid;
pub mod switcher;

pub use boxed::Boxed;
pub use cluster::{Align, Cluster, Justify};
pub use container::Container;
pub use cover::Cover;
pub use frame::{AspectRatio, Frame};
pub use grid::Grid;
pub use grid_area::GridArea;
pub use icon::Icon;
pub use imposter::{Imposter, ImposterVariants};
pub use reel::{Reel, ReelVariants};
pub use sidebar::{Side, Sidebar};
pub use stack::Stack;
pub use subgrid::Subgrid;
pub use switcher::Switcher;

use crate::error::RecipeError;
use crate::stylesheet::StyleSheet;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A configurable CSS layout primitive.
pub trait Recipe {
    /// Display name, e.g. `"Grid-Area"`.
    fn name(&self) -> &'static str;

    /// Class the generated rules hang off, without the leading dot.
    fn class_name(&self) -> &str;

    fn stylesheet(&self) -> StyleSheet;

    /// Checks option combinations that would render nonsense CSS.
    fn validate(&self) -> Result<(), RecipeError> {
        Ok(())
    }

    fn css(&self) -> String {
        self.stylesheet().to_css()
    }

    /// `.class_name`
    fn selector(&self) -> String {
        format!(".{}", self.class_name())
    }
}

/// Every recipe the generator knows, addressable by slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeKind {
    Stack,
    Box,
    Grid,
    Cluster,
    Cover,
    Sidebar,
    Switcher,
    Frame,
    Reel,
    Imposter,
    Subgrid,
    Icon,
    Container,
    GridArea,
}

static KINDS_BY_SLUG: phf::Map<&'static str, RecipeKind> = phf_map! {
    "stack" => RecipeKind::Stack,
    "box" => RecipeKind::Box,
    "grid" => RecipeKind::Grid,
    "cluster" => RecipeKind::Cluster,
    "cover" => RecipeKind::Cover,
    "sidebar" => RecipeKind::Sidebar,
    "switcher" => RecipeKind::Switcher,
    "frame" => RecipeKind::Frame,
    "reel" => RecipeKind::Reel,
    "imposter" => RecipeKind::Imposter,
    "subgrid" => RecipeKind::Subgrid,
    "icon" => RecipeKind::Icon,
    "container" => RecipeKind::Container,
    "grid-area" => RecipeKind::GridArea,
};

impl RecipeKind {
    pub const ALL: [RecipeKind; 14] = [
        RecipeKind::Stack,
        RecipeKind::Box,
        RecipeKind::Grid,
        RecipeKind::Cluster,
        RecipeKind::Cover,
        RecipeKind::Sidebar,
        RecipeKind::Switcher,
        RecipeKind::Frame,
        RecipeKind::Reel,
        RecipeKind::Imposter,
        RecipeKind::Subgrid,
        RecipeKind::Icon,
        RecipeKind::Container,
        RecipeKind::GridArea,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            RecipeKind::Stack => "stack",
            RecipeKind::Box => "box",
            RecipeKind::Grid => "grid",
            RecipeKind::Cluster => "cluster",
            RecipeKind::Cover => "cover",
            RecipeKind::Sidebar => "sidebar",
            RecipeKind::Switcher => "switcher",
            RecipeKind::Frame => "frame",
            RecipeKind::Reel => "reel",
            RecipeKind::Imposter => "imposter",
            RecipeKind::Subgrid => "subgrid",
            RecipeKind::Icon => "icon",
            RecipeKind::Container => "container",
            RecipeKind::GridArea => "grid-area",
        }
    }

    /// The recipe with all options at their defaults.
    pub fn default_recipe(self) -> AnyRecipe {
        match self {
            RecipeKind::Stack => AnyRecipe::Stack(Stack::default()),
            RecipeKind::Box => AnyRecipe::Box(Boxed::default()),
            RecipeKind::Grid => AnyRecipe::Grid(Grid::default()),
            RecipeKind::Cluster => AnyRecipe::Cluster(Cluster::default()),
            RecipeKind::Cover => AnyRecipe::Cover(Cover::default()),
            RecipeKind::Sidebar => AnyRecipe::Sidebar(Sidebar::default()),
            RecipeKind::Switcher => AnyRecipe::Switcher(Switcher::default()),
            RecipeKind::Frame => AnyRecipe::Frame(Frame::default()),
            RecipeKind::Reel => AnyRecipe::Reel(Reel::default()),
            RecipeKind::Imposter => AnyRecipe::Imposter(Imposter::default()),
            RecipeKind::Subgrid => AnyRecipe::Subgrid(Subgrid::default()),
            RecipeKind::Icon => AnyRecipe::Icon(Icon::default()),
            RecipeKind::Container => AnyRecipe::Container(Container::default()),
            RecipeKind::GridArea => AnyRecipe::GridArea(GridArea::default()),
        }
    }
}

impl FromStr for RecipeKind {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KINDS_BY_SLUG
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| RecipeError::UnknownRecipe(s.to_string()))
    }
}

impl fmt::Display for RecipeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Any one recipe, for heterogeneous lists and config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "recipe", rename_all = "kebab-case")]
pub enum AnyRecipe {
    Stack(Stack),
    Box(Boxed),
    Grid(Grid),
    Cluster(Cluster),
    Cover(Cover),
    Sidebar(Sidebar),
    Switcher(Switcher),
    Frame(Frame),
    Reel(Reel),
    Imposter(Imposter),
    Subgrid(Subgrid),
    Icon(Icon),
    Container(Container),
    GridArea(GridArea),
}

impl AnyRecipe {
    pub fn kind(&self) -> RecipeKind {
        match self {
            AnyRecipe::Stack(_) => RecipeKind::Stack,
            AnyRecipe::Box(_) => RecipeKind::Box,
            AnyRecipe::Grid(_) => RecipeKind::Grid,
            AnyRecipe::Cluster(_) => RecipeKind::Cluster,
            AnyRecipe::Cover(_) => RecipeKind::Cover,
            AnyRecipe::Sidebar(_) => RecipeKind::Sidebar,
            AnyRecipe::Switcher(_) => RecipeKind::Switcher,
            AnyRecipe::Frame(_) => RecipeKind::Frame,
            AnyRecipe::Reel(_) => RecipeKind::Reel,
            AnyRecipe::Imposter(_) => RecipeKind::Imposter,
            AnyRecipe::Subgrid(_) => RecipeKind::Subgrid,
            AnyRecipe::Icon(_) => RecipeKind::Icon,
            AnyRecipe::Container(_) => RecipeKind::Container,
            AnyRecipe::GridArea(_) => RecipeKind::GridArea,
        }
    }

    fn as_recipe(&self) -> &dyn Recipe {
        match self {
            AnyRecipe::Stack(r) => r,
            AnyRecipe::Box(r) => r,
            AnyRecipe::Grid(r) => r,
            AnyRecipe::Cluster(r) => r,
            AnyRecipe::Cover(r) => r,
            AnyRecipe::Sidebar(r) => r,
            AnyRecipe::Switcher(r) => r,
            AnyRecipe::Frame(r) => r,
            AnyRecipe::Reel(r) => r,
            AnyRecipe::Imposter(r) => r,
            AnyRecipe::Subgrid(r) => r,
            AnyRecipe::Icon(r) => r,
            AnyRecipe::Container(r) => r,
            AnyRecipe::GridArea(r) => r,
        }
    }
}

impl Recipe for AnyRecipe {
    fn name(&self) -> &'static str {
        self.as_recipe().name()
    }

    fn class_name(&self) -> &str {
        self.as_recipe().class_name()
    }

    fn stylesheet(&self) -> StyleSheet {
        self.as_recipe().stylesheet()
    }

    fn validate(&self) -> Result<(), RecipeError> {
        self.as_recipe().validate()
    }
}

/// Per-recipe option overrides, as read from a config file.
///
/// Recipes left out fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RecipeSet {
    pub stack: Option<Stack>,
    #[serde(rename = "box")]
    pub boxed: Option<Boxed>,
    pub grid: Option<Grid>,
    pub cluster: Option<Cluster>,
    pub cover: Option<Cover>,
    pub sidebar: Option<Sidebar>,
    pub switcher: Option<Switcher>,
    pub frame: Option<Frame>,
    pub reel: Option<Reel>,
    pub imposter: Option<Imposter>,
    pub subgrid: Option<Subgrid>,
    pub icon: Option<Icon>,
    pub container: Option<Container>,
    pub grid_area: Option<GridArea>,
}

impl RecipeSet {
    /// The configured recipe for `kind`, or its defaults.
    pub fn get(&self, kind: RecipeKind) -> AnyRecipe {
        let configured = match kind {
            RecipeKind::Stack => self.stack.clone().map(AnyRecipe::Stack),
            RecipeKind::Box => self.boxed.clone().map(AnyRecipe::Box),
            RecipeKind::Grid => self.grid.clone().map(AnyRecipe::Grid),
            RecipeKind::Cluster => self.cluster.clone().map(AnyRecipe::Cluster),
            RecipeKind::Cover => self.cover.clone().map(AnyRecipe::Cover),
            RecipeKind::Sidebar => self.sidebar.clone().map(AnyRecipe::Sidebar),
            RecipeKind::Switcher => self.switcher.clone().map(AnyRecipe::Switcher),
            RecipeKind::Frame => self.frame.clone().map(AnyRecipe::Frame),
            RecipeKind::Reel => self.reel.clone().map(AnyRecipe::Reel),
            RecipeKind::Imposter => self.imposter.clone().map(AnyRecipe::Imposter),
            RecipeKind::Subgrid => self.subgrid.clone().map(AnyRecipe::Subgrid),
            RecipeKind::Icon => self.icon.clone().map(AnyRecipe::Icon),
            RecipeKind::Container => self.container.clone().map(AnyRecipe::Container),
            RecipeKind::GridArea => self.grid_area.clone().map(AnyRecipe::GridArea),
        };
        configured.unwrap_or_else(|| kind.default_recipe())
    }

    /// Resolves a list of kinds, or every recipe when `kinds` is empty.
    pub fn select(&self, kinds: &[RecipeKind]) -> Vec<AnyRecipe> {
        let kinds = if kinds.is_empty() {
            &RecipeKind::ALL[..]
        } else {
            kinds
        };
        kinds.iter().map(|kind| self.get(*kind)).collect()
    }
}
