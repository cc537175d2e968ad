use rusqlite::Connection;
use tracing::info;

/// Run SQLite migrations
pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    info!("Running SQLite migrations");

    create_emergency_contacts_table(conn)?;
    create_water_logs_table(conn)?;
    create_sleep_logs_table(conn)?;
    create_prescriptions_table(conn)?;

    info!("SQLite migrations completed successfully");
    Ok(())
}

/// Create the emergency contacts table
fn create_emergency_contacts_table(conn: &Connection) -> Result<(), String> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS emergency_contacts (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            phone TEXT NOT NULL,
            relation TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| e.to_string())?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_emergency_contacts_user
         ON emergency_contacts (user_id, created_at DESC)",
        [],
    )
    .map_err(|e| format!("Failed to create index: {}", e))?;

    Ok(())
}

/// Create the water logs table; one row per user per day
fn create_water_logs_table(conn: &Connection) -> Result<(), String> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS water_logs (
            user_id TEXT NOT NULL,
            date TEXT NOT NULL,
            intake INTEGER NOT NULL,
            PRIMARY KEY (user_id, date)
        )",
        [],
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}

/// Create the sleep logs table; one row per user per day
fn create_sleep_logs_table(conn: &Connection) -> Result<(), String> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS sleep_logs (
            user_id TEXT NOT NULL,
            date TEXT NOT NULL,
            hours REAL NOT NULL,
            PRIMARY KEY (user_id, date)
        )",
        [],
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}

/// Create the prescriptions metadata table
fn create_prescriptions_table(conn: &Connection) -> Result<(), String> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS prescriptions (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            title TEXT NOT NULL,
            date TEXT NOT NULL,
            file_path TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| e.to_string())?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_prescriptions_user
         ON prescriptions (user_id, created_at DESC)",
        [],
    )
    .map_err(|e| format!("Failed to create index: {}", e))?;

    Ok(())
}
