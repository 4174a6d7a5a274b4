//! Preview viewport state: zoom, rulers and crosshair inspection.
//!
//! This is the display-independent half of an interactive preview. A host
//! (webview, GUI, terminal) feeds it input events and container sizes and
//! draws whatever it reports; no drawing happens here.
//!
//! All lengths are in screen pixels except the base size and inspected
//! coordinates, which are in SVG user units.

use crate::render::SvgDocument;

/// Size assumed when the converted document has a non-numeric width or height
pub const DEFAULT_BASE_SIZE: f64 = 24.0;

/// Most labelled marks one ruler produces before its interval widens tenfold
pub const MAX_RULER_TICKS: usize = 200;

// =============================================================================
// PreviewConfig
// =============================================================================

/// Zoom limits and steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewConfig {
    /// Smallest zoom factor
    pub min_zoom: f64,
    /// Largest zoom factor
    pub max_zoom: f64,
    /// Zoom change per zoom-in/zoom-out command
    pub zoom_step: f64,
    /// Zoom change per modified wheel notch
    pub wheel_step: f64,
    /// Margin kept free on each axis when fitting to the container
    pub fit_padding: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.25,
            max_zoom: 50.0,
            zoom_step: 0.25,
            wheel_step: 0.1,
            fit_padding: 40.0,
        }
    }
}

// =============================================================================
// Input
// =============================================================================

/// Keyboard commands understood by the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKey {
    /// `+` or `=`
    ZoomIn,
    /// `-` or `_`
    ZoomOut,
    /// `0`: fit to container
    Fit,
}

impl PreviewKey {
    /// Map a key name to a command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "+" | "=" => Some(Self::ZoomIn),
            "-" | "_" => Some(Self::ZoomOut),
            "0" => Some(Self::Fit),
            _ => None,
        }
    }
}

/// Ruler orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Top ruler, measures width
    Horizontal,
    /// Left ruler, measures height
    Vertical,
}

/// One labelled ruler mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerTick {
    /// Label in SVG units
    pub value: f64,
    /// Offset along the ruler in screen pixels
    pub position: f64,
}

// =============================================================================
// Viewport
// =============================================================================

/// Zoom and inspection state for one previewed image.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    base_width: f64,
    base_height: f64,
    zoom: f64,
    crosshair: bool,
    config: PreviewConfig,
}

impl Viewport {
    /// Create a viewport for an image of the given natural size, at 100%.
    ///
    /// A size that is not positive and finite falls back to
    /// [`DEFAULT_BASE_SIZE`].
    pub fn new(base_width: f64, base_height: f64) -> Self {
        let mut viewport = Self {
            base_width: DEFAULT_BASE_SIZE,
            base_height: DEFAULT_BASE_SIZE,
            zoom: 1.0,
            crosshair: false,
            config: PreviewConfig::default(),
        };
        viewport.set_base_size(base_width, base_height);
        viewport
    }

    /// Create a viewport sized from a converted document.
    ///
    /// Falls back to [`DEFAULT_BASE_SIZE`] when width or height is not a
    /// plain number (e.g. `48sp`).
    pub fn for_document(doc: &SvgDocument) -> Self {
        let (w, h) = doc.size().unwrap_or((DEFAULT_BASE_SIZE, DEFAULT_BASE_SIZE));
        Self::new(w, h)
    }

    /// Replace the zoom limits, clamping the current zoom into them.
    pub fn with_config(mut self, config: PreviewConfig) -> Self {
        self.config = config;
        self.set_zoom(self.zoom);
        self
    }

    /// Natural image size in SVG units.
    pub fn base_size(&self) -> (f64, f64) {
        (self.base_width, self.base_height)
    }

    /// Update the natural size, e.g. once the host knows the decoded image size.
    ///
    /// Non-positive sizes are ignored.
    pub fn set_base_size(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            self.base_width = width;
            self.base_height = height;
        }
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom factor, clamped to the configured limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        // not `f64::clamp`: a config with min > max must not panic
        self.zoom = zoom.max(self.config.min_zoom).min(self.config.max_zoom);
    }

    /// Zoom in by one step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + self.config.zoom_step);
    }

    /// Zoom out by one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - self.config.zoom_step);
    }

    /// Apply a modified (ctrl/cmd) wheel event. Scrolling down zooms out.
    pub fn wheel(&mut self, delta_y: f64) {
        let delta = if delta_y > 0.0 {
            -self.config.wheel_step
        } else {
            self.config.wheel_step
        };
        self.set_zoom(self.zoom + delta);
    }

    /// Fit the image into a container, keeping `fit_padding` free.
    ///
    /// Small icons are scaled up, up to the maximum zoom.
    pub fn fit(&mut self, container_width: f64, container_height: f64) {
        let pad = self.config.fit_padding;
        let scale_x = (container_width - pad) / self.base_width;
        let scale_y = (container_height - pad) / self.base_height;
        self.set_zoom(scale_x.min(scale_y));
    }

    /// Apply a keyboard command. `Fit` uses the given container size.
    pub fn apply_key(&mut self, key: PreviewKey, container_width: f64, container_height: f64) {
        match key {
            PreviewKey::ZoomIn => self.zoom_in(),
            PreviewKey::ZoomOut => self.zoom_out(),
            PreviewKey::Fit => self.fit(container_width, container_height),
        }
    }

    /// Displayed image size in screen pixels.
    pub fn scaled_size(&self) -> (f64, f64) {
        (self.base_width * self.zoom, self.base_height * self.zoom)
    }

    /// Zoom as a whole percentage, e.g. `250` for 2.5x.
    pub fn zoom_percent(&self) -> i64 {
        round_half_up(self.zoom * 100.0) as i64
    }

    /// Zoom label, e.g. `250%`.
    pub fn zoom_label(&self) -> String {
        format!("{}%", self.zoom_percent())
    }

    /// Natural size label, e.g. `24 × 24 px`.
    pub fn bounds_label(&self) -> String {
        format!("{} × {} px", self.base_width, self.base_height)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rulers
    // ─────────────────────────────────────────────────────────────────────────

    /// Distance between ruler labels in SVG units; denser when zoomed in.
    pub fn ruler_interval(&self) -> f64 {
        match self.zoom {
            z if z > 8.0 => 2.0,
            z if z > 4.0 => 5.0,
            z if z > 2.0 => 10.0,
            z if z > 0.5 => 20.0,
            _ => 50.0,
        }
    }

    /// Ruler marks along one axis for a container of `container_extent` pixels.
    ///
    /// Marks run from 0 in steps of [`ruler_interval`](Self::ruler_interval),
    /// plus a final mark at the image edge when the steps do not land on it.
    /// The image is centered in the container. The step widens tenfold until
    /// at most [`MAX_RULER_TICKS`] steps fit.
    pub fn ruler_ticks(&self, axis: Axis, container_extent: f64) -> Vec<RulerTick> {
        let extent = match axis {
            Axis::Horizontal => self.base_width,
            Axis::Vertical => self.base_height,
        };
        let mut interval = self.ruler_interval();
        while extent / interval > MAX_RULER_TICKS as f64 {
            interval *= 10.0;
        }
        let origin = container_extent / 2.0 - extent * self.zoom / 2.0;
        let tick = |value: f64| RulerTick {
            value,
            position: origin + value * self.zoom,
        };

        let steps = (extent / interval).floor() as usize;
        let mut ticks: Vec<RulerTick> = (0..=steps).map(|i| tick(i as f64 * interval)).collect();
        if ticks.last().is_none_or(|t| t.value != extent) {
            ticks.push(tick(extent));
        }
        ticks
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Crosshair
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the crosshair is shown.
    pub fn crosshair_enabled(&self) -> bool {
        self.crosshair
    }

    /// Toggle the crosshair, returning the new state.
    pub fn toggle_crosshair(&mut self) -> bool {
        self.crosshair = !self.crosshair;
        self.crosshair
    }

    /// Map a cursor position to SVG coordinates.
    ///
    /// `x`/`y` are screen pixels relative to the image's top-left corner.
    /// Returns rounded SVG coordinates, or `None` when the crosshair is off
    /// or the cursor is outside the image.
    pub fn inspect(&self, x: f64, y: f64) -> Option<(i64, i64)> {
        if !self.crosshair {
            return None;
        }
        let svg_x = round_half_up(x / self.zoom);
        let svg_y = round_half_up(y / self.zoom);
        let inside = (0.0..=self.base_width).contains(&svg_x) && (0.0..=self.base_height).contains(&svg_y);
        inside.then_some((svg_x as i64, svg_y as i64))
    }
}

/// Round to nearest, halves toward positive infinity.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

// =============================================================================
// Tests
// =============================================================================
