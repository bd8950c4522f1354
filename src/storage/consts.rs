pub const DEFAULT_MAX_STORED_SESSIONS: usize = 10_000;
