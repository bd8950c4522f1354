pub const USER_AGENT: &str = "VIGEOGUESSR/1.0 (https://vigeoguessr.com)";
pub const REVERSE_ZOOM_LEVEL: &str = "10";
