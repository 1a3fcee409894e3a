//! SQL schema for the rental database
//!
//! Dates are stored as `YYYY-MM-DD` and times as `HH:MM:SS` text so that the
//! same statements run on PostgreSQL and SQLite, and so that
//! `date || ' ' || time` compares chronologically as a string.
//! Confirmation numbers and rental ids come from the database's own
//! generators and are never reused.

/// SQL dialect of the connected database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl Dialect {
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Dialect::Postgres)
        } else if url.starts_with("sqlite:") {
            Some(Dialect::Sqlite)
        } else {
            None
        }
    }

    pub fn schema(&self) -> &'static [&'static str] {
        match self {
            Dialect::Postgres => POSTGRES_SCHEMA,
            Dialect::Sqlite => SQLITE_SCHEMA,
        }
    }

    /// Statement that moves an id generator past an explicitly inserted id.
    ///
    /// SQLite's AUTOINCREMENT already tracks the largest rowid ever used.
    pub fn resync_sequence(&self, table: &str, column: &str) -> Option<String> {
        match self {
            Dialect::Postgres => Some(format!(
                "SELECT setval('{table}_{column}_seq', GREATEST(\
                 (SELECT COALESCE(MAX({column}), 1) FROM {table}), \
                 (SELECT last_value FROM {table}_{column}_seq)))"
            )),
            Dialect::Sqlite => None,
        }
    }
}

const POSTGRES_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS branch (
        location TEXT NOT NULL,
        city TEXT NOT NULL,
        PRIMARY KEY (location, city)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicle_type (
        vtname TEXT PRIMARY KEY,
        features TEXT NOT NULL DEFAULT '',
        wrate DOUBLE PRECISION NOT NULL,
        drate DOUBLE PRECISION NOT NULL,
        hrate DOUBLE PRECISION NOT NULL,
        wirate DOUBLE PRECISION NOT NULL,
        dirate DOUBLE PRECISION NOT NULL,
        hirate DOUBLE PRECISION NOT NULL,
        krate DOUBLE PRECISION NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicle (
        vlicense TEXT PRIMARY KEY,
        make TEXT NOT NULL,
        model TEXT NOT NULL,
        year BIGINT NOT NULL,
        color TEXT NOT NULL,
        odometer BIGINT NOT NULL,
        status TEXT NOT NULL DEFAULT 'available',
        vtname TEXT NOT NULL REFERENCES vehicle_type (vtname),
        location TEXT NOT NULL,
        city TEXT NOT NULL,
        FOREIGN KEY (location, city) REFERENCES branch (location, city)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customer (
        dlicense TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        phone_number TEXT NOT NULL,
        address TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS time_period (
        from_date TEXT NOT NULL,
        from_time TEXT NOT NULL,
        to_date TEXT NOT NULL,
        to_time TEXT NOT NULL,
        PRIMARY KEY (from_date, from_time, to_date, to_time)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reservation (
        conf_no BIGSERIAL PRIMARY KEY,
        vtname TEXT NOT NULL REFERENCES vehicle_type (vtname),
        dlicense TEXT NOT NULL REFERENCES customer (dlicense),
        from_date TEXT NOT NULL,
        from_time TEXT NOT NULL,
        to_date TEXT NOT NULL,
        to_time TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS rental (
        rid BIGSERIAL PRIMARY KEY,
        vlicense TEXT NOT NULL REFERENCES vehicle (vlicense),
        dlicense TEXT NOT NULL REFERENCES customer (dlicense),
        from_date TEXT NOT NULL,
        from_time TEXT NOT NULL,
        to_date TEXT NOT NULL,
        to_time TEXT NOT NULL,
        odometer BIGINT NOT NULL,
        card_name TEXT NOT NULL,
        card_no TEXT NOT NULL,
        exp_date TEXT NOT NULL,
        conf_no BIGINT UNIQUE REFERENCES reservation (conf_no) ON DELETE SET NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicle_return (
        rid BIGINT PRIMARY KEY REFERENCES rental (rid),
        return_date TEXT NOT NULL,
        return_time TEXT NOT NULL,
        odometer BIGINT NOT NULL,
        full_tank BIGINT NOT NULL,
        charge TEXT NOT NULL
    )
    "#,
];

const SQLITE_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS branch (
        location TEXT NOT NULL,
        city TEXT NOT NULL,
        PRIMARY KEY (location, city)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicle_type (
        vtname TEXT PRIMARY KEY,
        features TEXT NOT NULL DEFAULT '',
        wrate REAL NOT NULL,
        drate REAL NOT NULL,
        hrate REAL NOT NULL,
        wirate REAL NOT NULL,
        dirate REAL NOT NULL,
        hirate REAL NOT NULL,
        krate REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicle (
        vlicense TEXT PRIMARY KEY,
        make TEXT NOT NULL,
        model TEXT NOT NULL,
        year INTEGER NOT NULL,
        color TEXT NOT NULL,
        odometer INTEGER NOT NULL,
        status TEXT NOT NULL DEFAULT 'available',
        vtname TEXT NOT NULL REFERENCES vehicle_type (vtname),
        location TEXT NOT NULL,
        city TEXT NOT NULL,
        FOREIGN KEY (location, city) REFERENCES branch (location, city)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customer (
        dlicense TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        phone_number TEXT NOT NULL,
        address TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS time_period (
        from_date TEXT NOT NULL,
        from_time TEXT NOT NULL,
        to_date TEXT NOT NULL,
        to_time TEXT NOT NULL,
        PRIMARY KEY (from_date, from_time, to_date, to_time)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reservation (
        conf_no INTEGER PRIMARY KEY AUTOINCREMENT,
        vtname TEXT NOT NULL REFERENCES vehicle_type (vtname),
        dlicense TEXT NOT NULL REFERENCES customer (dlicense),
        from_date TEXT NOT NULL,
        from_time TEXT NOT NULL,
        to_date TEXT NOT NULL,
        to_time TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS rental (
        rid INTEGER PRIMARY KEY AUTOINCREMENT,
        vlicense TEXT NOT NULL REFERENCES vehicle (vlicense),
        dlicense TEXT NOT NULL REFERENCES customer (dlicense),
        from_date TEXT NOT NULL,
        from_time TEXT NOT NULL,
        to_date TEXT NOT NULL,
        to_time TEXT NOT NULL,
        odometer INTEGER NOT NULL,
        card_name TEXT NOT NULL,
        card_no TEXT NOT NULL,
        exp_date TEXT NOT NULL,
        conf_no INTEGER UNIQUE REFERENCES reservation (conf_no) ON DELETE SET NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicle_return (
        rid INTEGER PRIMARY KEY REFERENCES rental (rid),
        return_date TEXT NOT NULL,
        return_time TEXT NOT NULL,
        odometer INTEGER NOT NULL,
        full_tank INTEGER NOT NULL,
        charge TEXT NOT NULL
    )
    "#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_url() {
        assert_eq!(Dialect::from_url("postgres://localhost/rental"), Some(Dialect::Postgres));
        assert_eq!(Dialect::from_url("postgresql://localhost/rental"), Some(Dialect::Postgres));
        assert_eq!(Dialect::from_url("sqlite::memory:"), Some(Dialect::Sqlite));
        assert_eq!(Dialect::from_url("mysql://localhost/rental"), None);
    }

    #[test]
    fn test_both_dialects_create_every_table() {
        for dialect in [Dialect::Postgres, Dialect::Sqlite] {
            let ddl = dialect.schema().join("\n");
            for table in [
                "branch",
                "vehicle_type",
                "vehicle",
                "customer",
                "time_period",
                "reservation",
                "rental",
                "vehicle_return",
            ] {
                assert!(
                    ddl.contains(&format!("CREATE TABLE IF NOT EXISTS {} (", table)),
                    "{:?} is missing {}",
                    dialect,
                    table
                );
            }
        }
    }

    #[test]
    fn test_resync_only_for_postgres() {
        assert!(Dialect::Sqlite.resync_sequence("reservation", "conf_no").is_none());
        let sql = Dialect::Postgres
            .resync_sequence("reservation", "conf_no")
            .unwrap();
        assert!(sql.contains("reservation_conf_no_seq"));
        assert!(sql.contains("MAX(conf_no)"));
    }
}
