// Default values for every effect - these are the single source of truth for
// `EffectsConfig::default()`.

// Start-up: how long to wait for `init_effects_config_js` (milliseconds)
pub const CONFIG_WAIT_MS: u32 = 150;
pub const CONFIG_POLL_MS: u32 = 25;

// Particle field
pub const DEFAULT_PARTICLE_COUNT: usize = 100;
pub const PARTICLE_COLOR_CYAN: &str = "#00f0ff";
pub const PARTICLE_COLOR_MAGENTA: &str = "#ff006e";
pub const PARTICLE_SPAWN_Y: f64 = -10.0;
pub const PARTICLE_GLOW: f64 = 10.0;

// Cursor trail
pub const DEFAULT_TRAIL_CAPACITY: usize = 20;
pub const MAX_TRAIL_CAPACITY: usize = 1_000;
pub const DEFAULT_TRAIL_DECAY_STEP: f64 = 0.02;
pub const TRAIL_MAX_RADIUS: f64 = 5.0;
pub const TRAIL_GLOW: f64 = 20.0;
pub const TRAIL_GLOW_COLOR: &str = "#00f0ff";

// Interval tasks (milliseconds)
pub const CLOCK_PERIOD_MS: u32 = 1_000;
pub const GLITCH_PERIOD_MS: u32 = 5_000;
pub const GLITCH_GAP_MS: u32 = 100;
pub const HOLO_PERIOD_MS: u32 = 10_000;
pub const HOLO_REVERT_MS: u32 = 200;
pub const HOLO_HUE_MIN: f64 = 160.0;
pub const HOLO_HUE_SPAN: f64 = 60.0;

// Typing animation (milliseconds)
pub const TYPING_START_DELAY_MS: u32 = 1_000;
pub const TYPING_CHAR_DELAY_MS: u32 = 100;
pub const TYPING_DELETE_DELAY_MS: u32 = 50;
pub const TYPING_HOLD_DELAY_MS: u32 = 2_000;
pub const TYPING_NEXT_ROLE_DELAY_MS: u32 = 500;
pub const DEFAULT_ROLES: [&str; 6] = [
    "AI/ML_ENGINEER",
    "AI_RESEARCHER",
    "GENERATIVE_AI",
    "DEEP_LEARNING",
    "RAG_ARCHITECT",
    "DATA_SCIENTIST",
];

// Stats counter
pub const COUNTER_STEPS: u32 = 50;
pub const COUNTER_STEP_MS: u32 = 30;
pub const STATS_VISIBLE_THRESHOLD: f64 = 0.5;

// Notifications (milliseconds)
pub const NOTIFICATION_LIFETIME_MS: u32 = 3_000;
pub const NOTIFICATION_EXIT_MS: u32 = 500;

// Viewport reactors
pub const NAV_SECTION_OFFSET: f64 = 200.0;
pub const SMOOTH_SCROLL_OFFSET: f64 = 80.0;
pub const PARALLAX_SPEED: f64 = 0.2;
pub const PARALLAX_FADE: f64 = 0.3;
pub const TILT_DIVISOR: f64 = 20.0;
pub const FRAME_TILT_RANGE: f64 = 20.0;
pub const REVEAL_SELECTOR: &str =
    ".cyber-panel, .feature-card, .timeline-item, .project-card, .achievement-card";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const PROJECT_THRESHOLD: f64 = 0.2;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

// Easter egg
pub const EASTER_EGG_DURATION_MS: u32 = 10_000;

// Theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

// Contact form
pub const DEFAULT_CONTACT_EMAIL: &str = "prakhar.k2004@gmail.com";
pub const MESSAGE_SENT_TEXT: &str = "// MESSAGE_SENT_SUCCESSFULLY";
