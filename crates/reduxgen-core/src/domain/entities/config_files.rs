//! Fixed-content configuration files written after the install steps.
//!
//! Neither file depends on the app name.

pub const TAILWIND_CONFIG_FILE: &str = "tailwind.config.js";

pub const TAILWIND_CONFIG: &str = "module.exports = {
  content: [
    './pages/**/*.{js,ts,jsx,tsx}',
    './components/**/*.{js,ts,jsx,tsx}',
  ],
  theme: {
    extend: {},
  },
  plugins: [],
};";

pub const STYLES_DIR: &str = "styles";

pub const GLOBALS_CSS_FILE: &str = "globals.css";

pub const GLOBALS_CSS: &str = "@tailwind base;
@tailwind components;
@tailwind utilities;";
