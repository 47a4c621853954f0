pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS tasks (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    title TEXT NOT NULL,
    description TEXT,
    due_date TEXT,
    category TEXT NOT NULL DEFAULT 'General',
    completed INTEGER NOT NULL DEFAULT 0,
    urgency TEXT NOT NULL DEFAULT 'medium',
    reminder_date_time TEXT,
    reminder_reasoning TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_tasks_category ON tasks(category);
";
