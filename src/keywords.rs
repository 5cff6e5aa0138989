//! Reserved-word and built-in type-name tables.
//!
//! Both tables are sorted upper-case ASCII so lookups are a
//! case-insensitive binary search with no allocation.

use std::cmp::Ordering;

/// PostgreSQL-oriented keyword set: statements, object types,
/// constraints, joins, set operations, transactions, windows,
/// partitions and function attributes.
static KEYWORDS: &[&str] = &[
    "ABORT", "ACCESS", "ACTION", "ADD", "ADMIN", "AFTER",
    "AGGREGATE", "ALL", "ALSO", "ALTER", "ALWAYS", "ANALYZE",
    "AND", "ANY", "ARRAY", "AS", "ASC", "ASSERTION",
    "ATTACH", "ATTRIBUTE", "AUTHORIZATION", "BEFORE", "BEGIN", "BETWEEN",
    "BOTH", "BY", "CACHE", "CALL", "CALLED", "CASCADE",
    "CASCADED", "CASE", "CAST", "CATALOG", "CHAIN", "CHECK",
    "CHECKPOINT", "CLASS", "CLOSE", "CLUSTER", "COLLATE", "COLLATION",
    "COLUMN", "COLUMNS", "COMMENT", "COMMENTS", "COMMIT", "COMMITTED",
    "CONCURRENTLY", "CONFIGURATION", "CONFLICT", "CONNECTION", "CONSTRAINT", "CONSTRAINTS",
    "CONTINUE", "CONVERSION", "COPY", "COST", "CREATE", "CROSS",
    "CSV", "CUBE", "CURRENT", "CURRENT_CATALOG", "CURRENT_DATE", "CURRENT_ROLE",
    "CURRENT_SCHEMA", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER", "CURSOR", "CYCLE",
    "DATA", "DATABASE", "DEALLOCATE", "DECLARE", "DEFAULT", "DEFAULTS",
    "DEFERRABLE", "DEFERRED", "DEFINER", "DELETE", "DELIMITER", "DEPENDS",
    "DESC", "DETACH", "DICTIONARY", "DISABLE", "DISCARD", "DISTINCT",
    "DO", "DOMAIN", "DROP", "EACH", "ELSE", "ENABLE",
    "ENCODING", "ENCRYPTED", "END", "ENUM", "ESCAPE", "EVENT",
    "EXCEPT", "EXCLUDE", "EXCLUDING", "EXCLUSIVE", "EXECUTE", "EXISTS",
    "EXPLAIN", "EXPRESSION", "EXTENSION", "EXTERNAL", "EXTRACT", "FALSE",
    "FAMILY", "FETCH", "FILTER", "FIRST", "FOLLOWING", "FOR",
    "FORCE", "FOREIGN", "FORWARD", "FREEZE", "FROM", "FULL",
    "FUNCTION", "FUNCTIONS", "GENERATED", "GLOBAL", "GRANT", "GRANTED",
    "GREATEST", "GROUP", "GROUPING", "GROUPS", "HANDLER", "HAVING",
    "HOLD", "IDENTITY", "IF", "ILIKE", "IMMEDIATE", "IMMUTABLE",
    "IMPLICIT", "IMPORT", "IN", "INCLUDE", "INCLUDING", "INCREMENT",
    "INDEX", "INDEXES", "INHERIT", "INHERITS", "INITIALLY", "INLINE",
    "INNER", "INOUT", "INPUT", "INSENSITIVE", "INSERT", "INSTEAD",
    "INTERSECT", "INTO", "INVOKER", "IS", "ISNULL", "ISOLATION",
    "JOIN", "KEY", "LANGUAGE", "LARGE", "LAST", "LATERAL",
    "LEADING", "LEAKPROOF", "LEAST", "LEFT", "LEVEL", "LIKE",
    "LIMIT", "LISTEN", "LOAD", "LOCAL", "LOCALTIME", "LOCALTIMESTAMP",
    "LOCATION", "LOCK", "LOCKED", "LOGGED", "MAPPING", "MATCH",
    "MATCHED", "MATERIALIZED", "MAXVALUE", "MERGE", "METHOD", "MINVALUE",
    "MODE", "MOVE", "NATURAL", "NEW", "NEXT", "NFC",
    "NO", "NONE", "NORMALIZE", "NOT", "NOTHING", "NOTIFY",
    "NOTNULL", "NOWAIT", "NULL", "NULLIF", "NULLS", "OBJECT",
    "OF", "OFF", "OFFSET", "OIDS", "OLD", "ON",
    "ONLY", "OPERATOR", "OPTION", "OPTIONS", "OR", "ORDER",
    "ORDINALITY", "OTHERS", "OUT", "OUTER", "OVER", "OVERLAPS",
    "OVERLAY", "OVERRIDING", "OWNED", "OWNER", "PARALLEL", "PARAMETER",
    "PARSER", "PARTIAL", "PARTITION", "PASSING", "PASSWORD", "PLACING",
    "PLANS", "POLICY", "PRECEDING", "PREPARE", "PREPARED", "PRESERVE",
    "PRIMARY", "PRIOR", "PRIVILEGES", "PROCEDURAL", "PROCEDURE", "PROCEDURES",
    "PROGRAM", "PUBLICATION", "QUOTE", "RANGE", "READ", "REASSIGN",
    "RECHECK", "RECURSIVE", "REF", "REFERENCES", "REFERENCING", "REFRESH",
    "REINDEX", "RELATIVE", "RELEASE", "RENAME", "REPEATABLE", "REPLACE",
    "REPLICA", "RESET", "RESTART", "RESTRICT", "RETURN", "RETURNING",
    "RETURNS", "REVOKE", "RIGHT", "ROLE", "ROLLBACK", "ROLLUP",
    "ROUTINE", "ROUTINES", "ROW", "ROWS", "RULE", "SAFE",
    "SAVEPOINT", "SCHEMA", "SCHEMAS", "SCROLL", "SEARCH", "SECURITY",
    "SELECT", "SEQUENCE", "SEQUENCES", "SERIALIZABLE", "SERVER", "SESSION",
    "SESSION_USER", "SET", "SETOF", "SETS", "SHARE", "SHOW",
    "SIMILAR", "SIMPLE", "SKIP", "SNAPSHOT", "SOME", "STABLE",
    "STANDALONE", "START", "STATEMENT", "STATISTICS", "STDIN", "STDOUT",
    "STORAGE", "STORED", "STRICT", "STRIP", "SUBSCRIPTION", "SUPPORT",
    "SYMMETRIC", "SYSID", "SYSTEM", "TABLE", "TABLES", "TABLESAMPLE",
    "TABLESPACE", "TEMP", "TEMPLATE", "TEMPORARY", "THEN", "TIES",
    "TO", "TRAILING", "TRANSACTION", "TRANSFORM", "TREAT", "TRIGGER",
    "TRIM", "TRUE", "TRUNCATE", "TRUSTED", "TYPE", "TYPES",
    "UNBOUNDED", "UNCOMMITTED", "UNENCRYPTED", "UNION", "UNIQUE", "UNKNOWN",
    "UNLISTEN", "UNLOGGED", "UNSAFE", "UNTIL", "UPDATE", "USER",
    "USING", "VACUUM", "VALID", "VALIDATE", "VALIDATOR", "VALUE",
    "VALUES", "VARIADIC", "VERBOSE", "VERSION", "VIEW", "VIEWS",
    "VOLATILE", "WHEN", "WHERE", "WINDOW", "WITH", "WITHIN",
    "WITHOUT", "WORK", "WRAPPER", "WRITE", "ZONE",
];

/// Built-in type names: numeric, serial, character, temporal,
/// network, geometric, text search, OID and miscellaneous types.
static DATA_TYPES: &[&str] = &[
    "ANYARRAY", "ANYELEMENT", "BIGINT", "BIGSERIAL", "BIT", "BOOL",
    "BOOLEAN", "BOX", "BPCHAR", "BYTEA", "CHAR", "CHARACTER",
    "CID", "CIDR", "CIRCLE", "CITEXT", "DATE", "DATERANGE",
    "DECIMAL", "DOUBLE", "FLOAT", "FLOAT4", "FLOAT8", "HSTORE",
    "INET", "INT", "INT2", "INT4", "INT4RANGE", "INT8",
    "INT8RANGE", "INTEGER", "INTERVAL", "JSON", "JSONB", "JSONPATH",
    "LINE", "LSEG", "MACADDR", "MACADDR8", "MONEY", "NAME",
    "NUMERIC", "NUMRANGE", "OID", "PATH", "PG_LSN", "POINT",
    "POLYGON", "PRECISION", "REAL", "RECORD", "REGCLASS", "REGCONFIG",
    "REGDICTIONARY", "REGNAMESPACE", "REGOPER", "REGOPERATOR", "REGPROC", "REGPROCEDURE",
    "REGROLE", "REGTYPE", "SERIAL", "SERIAL2", "SERIAL4", "SERIAL8",
    "SMALLINT", "SMALLSERIAL", "TEXT", "TID", "TIME", "TIMESTAMP",
    "TIMESTAMPTZ", "TIMETZ", "TSQUERY", "TSRANGE", "TSTZRANGE", "TSVECTOR",
    "TXID_SNAPSHOT", "UUID", "VARBIT", "VARCHAR", "VARYING", "VOID",
    "XID", "XML",
];

/// Whether `text` is a reserved word, ignoring ASCII case.
#[must_use]
pub fn is_keyword(text: &str) -> bool {
    contains(KEYWORDS, text)
}

/// Whether `text` names a built-in data type, ignoring ASCII case.
#[must_use]
pub fn is_data_type(text: &str) -> bool {
    contains(DATA_TYPES, text)
}

fn contains(table: &[&str], text: &str) -> bool {
    !text.is_empty()
        && table
            .binary_search_by(|entry| compare_upper(entry, text))
            .is_ok()
}

fn compare_upper(entry: &str, text: &str) -> Ordering {
    entry
        .bytes()
        .cmp(text.bytes().map(|b| b.to_ascii_uppercase()))
}
