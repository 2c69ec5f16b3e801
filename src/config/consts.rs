// src/config/consts.rs

// Data sources
pub const DEFAULT_DATA_DIR: &str = "public";
pub const DATA_DIR_ENV: &str = "IGGY_DATA_DIR";
pub const COURSES_FILE: &str = "courses_data.csv";
pub const TEACHERS_FILE: &str = "faculty_directory_complete.csv";
pub const MENU_FILE: &str = "lunch_menu.json";

// Local store
pub const LOG_FILE: &str = ".store/debug.log";

// Lunch menu page
pub const MEAL_PRICE: &str = "$6.50 per meal";
pub const MENU_SCRAPER_CMD: &str = "python3 scripts/scrape_menu.py";

// Window
pub const WINDOW_W: f32 = 1200.0;
pub const WINDOW_H: f32 = 760.0;
