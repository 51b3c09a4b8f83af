//! Shared types, enums, and constants.
//!
//! All types that cross module boundaries or define the FFI data model live here.

use bitflags::bitflags;
use serde::Serialize;

// ============================================================================
// Widget Kinds
// ============================================================================

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WidgetKind {
    Text = 0,
    Button = 1,
    Image = 2,
    Switch = 3,
    Container = 4,
    Card = 5,
    Row = 6,
    Column = 7,
}

impl WidgetKind {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Text),
            1 => Some(Self::Button),
            2 => Some(Self::Image),
            3 => Some(Self::Switch),
            4 => Some(Self::Container),
            5 => Some(Self::Card),
            6 => Some(Self::Row),
            7 => Some(Self::Column),
            _ => None,
        }
    }

    pub fn capabilities(self) -> Capabilities {
        let base = Capabilities::HAS_VIEW | Capabilities::CONFIGURABLE;
        match self {
            Self::Text | Self::Image | Self::Switch => base,
            Self::Button => base | Capabilities::TAPPABLE,
            Self::Container | Self::Card => base | Capabilities::SINGLE_CHILD,
            Self::Row | Self::Column => base | Capabilities::MULTI_CHILD,
        }
    }

    /// Main axis for linear widgets.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::Row => Some(Axis::Row),
            Self::Column => Some(Axis::Column),
            _ => None,
        }
    }
}

bitflags! {
    /// What a widget handle may be used for at the binding surface.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u8 {
        const HAS_VIEW     = 0b0000_0001;
        const CONFIGURABLE = 0b0000_0010;
        const SINGLE_CHILD = 0b0000_0100;
        const MULTI_CHILD  = 0b0000_1000;
        const TAPPABLE     = 0b0001_0000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    Row,
    Column,
}

/// Button tap callback supplied by the foreign caller.
pub type ClickCallback = extern "C" fn();

// ============================================================================
// Presentation Attributes
// ============================================================================

/// RGBA color, components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    /// Platform "system blue".
    pub const SYSTEM_BLUE: Color = Color::rgba(0.0, 122.0 / 255.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from caller input, clamping each component into [0, 1].
    pub fn clamped(r: f32, g: f32, b: f32, a: f32) -> Self {
        let c = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self::rgba(c(r), c(g), c(b), c(a))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub color: Color,
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub radius: f32,
}

/// A view's frame in its superview's coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentMode {
    ScaleAspectFit,
}

/// Content carried by a native view, one variant per view class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "class")]
pub enum ViewContent {
    Plain,
    Label {
        text: String,
        /// 0 means unlimited.
        number_of_lines: u32,
    },
    Button {
        title: String,
        title_color: Color,
    },
    Image {
        symbol: String,
        content_mode: ContentMode,
    },
    Switch {
        is_on: bool,
    },
}

/// Per-layout-node measurement context handed to the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Intrinsic {
    Label(String),
    Button(String),
    Symbol,
    Switch,
}

impl Intrinsic {
    pub fn for_content(content: &ViewContent) -> Option<Self> {
        match content {
            ViewContent::Plain => None,
            ViewContent::Label { text, .. } => Some(Self::Label(text.clone())),
            ViewContent::Button { title, .. } => Some(Self::Button(title.clone())),
            ViewContent::Image { .. } => Some(Self::Symbol),
            ViewContent::Switch { .. } => Some(Self::Switch),
        }
    }
}
