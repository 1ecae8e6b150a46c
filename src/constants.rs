//! Engine-wide constants.
//!
//! Centralizes magic numbers and palette values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.25;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 3.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom step for the zoom-in/zoom-out operations
pub const ZOOM_STEP: f32 = 0.1;

/// Multiplicative zoom factor for one wheel notch toward the cursor
pub const WHEEL_ZOOM_IN: f32 = 1.1;

/// Multiplicative zoom factor for one wheel notch away from the cursor
pub const WHEEL_ZOOM_OUT: f32 = 0.9;

/// Pixels scrolled per wheel line when the host reports line deltas
pub const WHEEL_LINE_PIXELS: f32 = 20.0;

// ============================================================================
// Node Defaults
// ============================================================================

/// Default node size (width, height) in world units
pub const NODE_DEFAULT_SIZE: (f32, f32) = (160.0, 60.0);

/// Default size for transform nodes (wider to fit operation labels)
pub const TRANSFORM_DEFAULT_SIZE: (f32, f32) = (180.0, 64.0);

/// Default size for compute nodes
pub const COMPUTE_DEFAULT_SIZE: (f32, f32) = (180.0, 72.0);

/// Corner radius for node rectangles at zoom 1.0
pub const NODE_CORNER_RADIUS: f32 = 6.0;

/// Inner padding for node label/icon/badge placement at zoom 1.0
pub const NODE_PADDING: f32 = 10.0;

/// Label font size at zoom 1.0 (never rendered smaller than this)
pub const NODE_FONT_SIZE: f32 = 12.0;

/// Horizontal space reserved for a node icon at zoom 1.0
pub const NODE_ICON_ADVANCE: f32 = 18.0;

/// Diameter of the status badge at zoom 1.0
pub const STATUS_BADGE_SIZE: f32 = 10.0;

/// Outset of the selection/hover ring around a node, in screen pixels
pub const SELECTION_RING_OUTSET: f32 = 2.0;

// ============================================================================
// Grid & Background
// ============================================================================

/// Grid spacing in world units
pub const GRID_SIZE: f32 = 24.0;

/// Canvas background color
pub const CANVAS_BACKGROUND: &str = "#ffffff";

/// Grid line color (slate-500 at 20%)
pub const GRID_COLOR: &str = "rgba(100,116,139,0.2)";

// ============================================================================
// Edges
// ============================================================================

/// Default edge stroke color (slate-500)
pub const EDGE_COLOR: &str = "#64748b";

/// Stroke color for selected edges and the connect rubber band (sky-500)
pub const EDGE_HIGHLIGHT_COLOR: &str = "#0ea5e9";

/// Edge stroke width in screen pixels
pub const EDGE_WIDTH: f32 = 2.0;

/// Dash pattern for dashed edges
pub const EDGE_DASH: [f32; 2] = [8.0, 6.0];

/// Dash pattern for the connect rubber band
pub const CONNECT_DASH: [f32; 2] = [6.0, 4.0];

/// Rubber band stroke width in screen pixels
pub const CONNECT_WIDTH: f32 = 1.5;

/// Arrow head size in screen pixels
pub const ARROW_SIZE: f32 = 8.0;

/// Edge label font size in screen pixels
pub const EDGE_LABEL_FONT_SIZE: f32 = 12.0;

/// Edge label box height in screen pixels
pub const EDGE_LABEL_HEIGHT: f32 = 18.0;

/// Edge label horizontal padding in screen pixels
pub const EDGE_LABEL_PADDING: f32 = 6.0;

// ============================================================================
// Selection
// ============================================================================

/// Marquee fill color (blue-500 at 35%)
pub const MARQUEE_FILL: &str = "rgba(59,130,246,0.35)";

/// Marquee and selection ring stroke color
pub const MARQUEE_STROKE: &str = "rgba(59,130,246,0.9)";

/// Hover ring stroke color (fainter than the selection ring)
pub const HOVER_STROKE: &str = "rgba(59,130,246,0.5)";

/// Marquee stroke width in screen pixels
pub const MARQUEE_STROKE_WIDTH: f32 = 1.5;

// ============================================================================
// Node Palette
// ============================================================================

/// Fill color for source nodes (blue-600)
pub const SOURCE_COLOR: &str = "#2563eb";

/// Fill color for transform nodes (purple-500)
pub const TRANSFORM_COLOR: &str = "#a855f7";

/// Fill color for destination nodes (green-600)
pub const DESTINATION_COLOR: &str = "#16a34a";

/// Fill color for compute nodes (indigo-500)
pub const COMPUTE_COLOR: &str = "#6366f1";

/// Node outline color
pub const NODE_STROKE: &str = "rgba(0,0,0,0.2)";

/// Node label color
pub const NODE_LABEL_COLOR: &str = "#ffffff";

// ============================================================================
// Status Palette
// ============================================================================

/// Badge color for idle/unknown status (gray-400)
pub const STATUS_IDLE_COLOR: &str = "#9ca3af";

/// Badge color for pending status (yellow-500)
pub const STATUS_PENDING_COLOR: &str = "#eab308";

/// Badge color for partial status (orange-400)
pub const STATUS_PARTIAL_COLOR: &str = "#fb923c";

/// Badge color for running status (amber-500)
pub const STATUS_RUNNING_COLOR: &str = "#f59e0b";

/// Badge color for complete/success status (green-500)
pub const STATUS_SUCCESS_COLOR: &str = "#22c55e";

/// Badge color for error status (red-500)
pub const STATUS_ERROR_COLOR: &str = "#ef4444";
