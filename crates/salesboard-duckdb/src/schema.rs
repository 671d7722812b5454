/// DuckDB initialization SQL.
///
/// Executed once at database open time via `Connection::execute_batch`.
/// All statements use `IF NOT EXISTS` so they are safe to re-run on every
/// startup.
///
/// `memory_limit` comes from `Config.duckdb_memory_limit`
/// (env `SALESBOARD_DUCKDB_MEMORY`, default `"1GB"`). Always set an explicit
/// limit: the DuckDB default of 80% of system RAM is not acceptable for a
/// server process.
///
/// The tables mirror the restaurant operational schema. This service only
/// reads them; rows are loaded by whatever feeds the database.
pub fn init_sql(memory_limit: &str) -> String {
    format!(
        r#"SET memory_limit = '{memory_limit}';
SET threads = 2;

-- ===========================================
-- DIMENSIONS
-- ===========================================
CREATE TABLE IF NOT EXISTS stores (
    id              BIGINT PRIMARY KEY,
    name            VARCHAR NOT NULL,
    city            VARCHAR,
    state           VARCHAR,
    is_active       BOOLEAN NOT NULL DEFAULT TRUE
);

-- "type" is e.g. 'P' (presencial) or 'D' (delivery).
CREATE TABLE IF NOT EXISTS channels (
    id              BIGINT PRIMARY KEY,
    name            VARCHAR NOT NULL,
    "type"          VARCHAR,
    description     VARCHAR
);

CREATE TABLE IF NOT EXISTS categories (
    id              BIGINT PRIMARY KEY,
    name            VARCHAR NOT NULL
);

CREATE TABLE IF NOT EXISTS products (
    id              BIGINT PRIMARY KEY,
    name            VARCHAR NOT NULL,
    category_id     BIGINT
);

-- Add-ons and customizations attached to a product line.
CREATE TABLE IF NOT EXISTS items (
    id              BIGINT PRIMARY KEY,
    name            VARCHAR NOT NULL
);

-- ===========================================
-- FACTS
-- ===========================================
-- sale_status_desc: 'COMPLETED' | 'CANCELLED' (other values are counted in
-- totals but never in revenue).
CREATE TABLE IF NOT EXISTS sales (
    id                  BIGINT PRIMARY KEY,
    store_id            BIGINT NOT NULL,
    channel_id          BIGINT NOT NULL,
    created_at          TIMESTAMP NOT NULL,
    sale_status_desc    VARCHAR NOT NULL,
    total_amount        DECIMAL(12, 2) NOT NULL DEFAULT 0,
    production_seconds  INTEGER,
    delivery_seconds    INTEGER
);
CREATE INDEX IF NOT EXISTS idx_sales_created_at ON sales(created_at);
CREATE INDEX IF NOT EXISTS idx_sales_store      ON sales(store_id);
CREATE INDEX IF NOT EXISTS idx_sales_channel    ON sales(channel_id);

CREATE TABLE IF NOT EXISTS product_sales (
    id              BIGINT PRIMARY KEY,
    sale_id         BIGINT NOT NULL,
    product_id      BIGINT NOT NULL,
    quantity        DOUBLE NOT NULL DEFAULT 1,
    total_price     DECIMAL(12, 2) NOT NULL DEFAULT 0
);
CREATE INDEX IF NOT EXISTS idx_product_sales_sale ON product_sales(sale_id);

CREATE TABLE IF NOT EXISTS item_product_sales (
    id                  BIGINT PRIMARY KEY,
    product_sale_id     BIGINT NOT NULL,
    item_id             BIGINT NOT NULL,
    additional_price    DECIMAL(12, 2) NOT NULL DEFAULT 0
);
CREATE INDEX IF NOT EXISTS idx_item_product_sales_line ON item_product_sales(product_sale_id);
"#
    )
}
