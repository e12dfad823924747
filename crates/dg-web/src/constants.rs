// Page contract: element ids, classes and browser query strings.

// Section animation
pub const SECTION_ID: &str = "nature-section";
pub const CANVAS_ID: &str = "nature-canvas";
pub const VISIBILITY_THRESHOLD: f64 = 0.05; // fraction of the section that must intersect
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Page chrome
pub const MOBILE_MENU_BUTTON_ID: &str = "mobile-menu-button";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Classes toggled on the page
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "is-visible";

// Language markup
pub const LANG_DATA_SELECTOR: &str = "[data-lang]";
pub const LANG_DATA_ATTRIBUTE: &str = "data-lang";
pub const LINK_SELECTOR: &str = "a[href]";
