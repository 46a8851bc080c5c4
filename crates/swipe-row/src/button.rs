use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Label used when a button supplies neither text nor a component.
pub const DEFAULT_BUTTON_TEXT: &str = "Click Me";

/// Visual category a renderer can map to a background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ButtonKind {
    #[default]
    Default,
    Danger,
    Primary,
    Secondary,
    Success,
}

impl FromStr for ButtonKind {
    type Err = std::convert::Infallible;

    /// Unknown names fall back to [`ButtonKind::Default`]; `delete` is an
    /// alias for `danger`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "danger" | "delete" => ButtonKind::Danger,
            "primary" => ButtonKind::Primary,
            "secondary" => ButtonKind::Secondary,
            "success" => ButtonKind::Success,
            _ => ButtonKind::Default,
        })
    }
}

/// One action revealed behind the row. Order in the row's list is render order.
#[derive(Clone, Default)]
pub struct ActionButton {
    pub text: Option<String>,
    /// Opaque key the rendering collaborator resolves to custom content.
    pub component: Option<String>,
    pub kind: ButtonKind,
    /// Overrides the shared default width.
    pub fixed_width: Option<f32>,
    /// Close the row after `on_press` runs.
    pub auto_close: bool,
    pub on_press: Option<Rc<dyn Fn()>>,
}

impl ActionButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_component(component: impl Into<String>) -> Self {
        Self {
            component: Some(component.into()),
            ..Default::default()
        }
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn fixed_width(mut self, width: f32) -> Self {
        self.fixed_width = Some(width);
        self
    }

    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    pub fn on_press(mut self, f: impl Fn() + 'static) -> Self {
        self.on_press = Some(Rc::new(f));
        self
    }

    /// The fixed width, if it is a usable one. A zero width counts as unset.
    pub fn custom_width(&self) -> Option<f32> {
        self.fixed_width.filter(|w| *w > 0.0)
    }

    /// Text to render when there is no custom component.
    pub fn label(&self) -> Option<&str> {
        match (&self.component, &self.text) {
            (Some(_), _) => None,
            (None, Some(text)) => Some(text),
            (None, None) => Some(DEFAULT_BUTTON_TEXT),
        }
    }
}

impl fmt::Debug for ActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionButton")
            .field("text", &self.text)
            .field("component", &self.component)
            .field("kind", &self.kind)
            .field("fixed_width", &self.fixed_width)
            .field("auto_close", &self.auto_close)
            .field("on_press", &self.on_press.is_some())
            .finish()
    }
}
