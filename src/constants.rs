// Page wiring: element ids, selectors and attributes the frontend expects.

pub const CANVAS_ID: &str = "bg"; // WebGPU render surface
pub const BOARD_ID: &str = "board"; // content layer moved by scroll
pub const INTRO_SELECTOR: &str = ".intro"; // element whose CSS animation gates scrolling

// Canvas attributes read at startup
pub const SCENE_ATTR: &str = "data-scene"; // preset name: board | orbit | dolly
pub const SEED_ATTR: &str = "data-seed"; // optional starfield seed (decimal)

// Body attribute set once the intro animation has finished
pub const INTRO_COMPLETE_ATTR: &str = "data-intro-complete";
