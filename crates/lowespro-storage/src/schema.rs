//! Schema SQL constants.
//!
//! Used by migrations.rs. List-valued fields (categories, brands,
//! services, trades, contact lists) are JSON text columns defaulting to
//! '[]'. Timestamps are RFC 3339 UTC text. Denormalized vendor counts are
//! never stored; they are recomputed on read (see queries/).

/// V1 schema: seven resource tables + the sequence counter + indexes.
pub const TABLES_V1: &str = "
    CREATE TABLE IF NOT EXISTS vendors (
        id TEXT PRIMARY KEY NOT NULL,
        vendor_number TEXT NOT NULL UNIQUE,
        company_name TEXT NOT NULL,
        phone TEXT,
        fax TEXT,
        email TEXT,
        website TEXT,
        address TEXT,
        notes TEXT,
        categories TEXT NOT NULL DEFAULT '[]',
        brands TEXT NOT NULL DEFAULT '[]',
        services TEXT NOT NULL DEFAULT '[]',
        phone_contacts TEXT NOT NULL DEFAULT '[]',
        email_contacts TEXT NOT NULL DEFAULT '[]',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    ) STRICT;

    CREATE TABLE IF NOT EXISTS representatives (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        position TEXT,
        vendor_id TEXT REFERENCES vendors(id) ON DELETE SET NULL,
        vendor_name TEXT,
        phone TEXT,
        email TEXT,
        phone_contacts TEXT NOT NULL DEFAULT '[]',
        email_contacts TEXT NOT NULL DEFAULT '[]',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    ) STRICT;

    CREATE TABLE IF NOT EXISTS categories (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        description TEXT,
        parent_id TEXT REFERENCES categories(id),
        level TEXT NOT NULL DEFAULT '1',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    ) STRICT;

    CREATE TABLE IF NOT EXISTS services (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        description TEXT,
        parent_id TEXT REFERENCES services(id),
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    ) STRICT;

    CREATE TABLE IF NOT EXISTS brands (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        description TEXT,
        is_generic INTEGER NOT NULL DEFAULT 0,
        industry TEXT,
        logo TEXT,
        website TEXT,
        template_id TEXT,
        parent_brand_id TEXT REFERENCES brands(id),
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    ) STRICT;

    CREATE TABLE IF NOT EXISTS pro_customers (
        id TEXT PRIMARY KEY NOT NULL,
        business_name TEXT NOT NULL,
        contact_name TEXT,
        phone TEXT,
        email TEXT,
        address TEXT,
        notes TEXT,
        trades TEXT NOT NULL DEFAULT '[]',
        preferred_brands TEXT NOT NULL DEFAULT '[]',
        ordering_preferences TEXT,
        phone_contacts TEXT NOT NULL DEFAULT '[]',
        email_contacts TEXT NOT NULL DEFAULT '[]',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    ) STRICT;

    CREATE TABLE IF NOT EXISTS trades (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL UNIQUE,
        is_default INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL
    ) STRICT;

    CREATE TABLE IF NOT EXISTS sequences (
        name TEXT PRIMARY KEY NOT NULL,
        value INTEGER NOT NULL
    ) STRICT;

    CREATE INDEX IF NOT EXISTS idx_representatives_vendor ON representatives(vendor_id);
    CREATE INDEX IF NOT EXISTS idx_categories_parent ON categories(parent_id);
    CREATE INDEX IF NOT EXISTS idx_brands_industry ON brands(industry);
    CREATE INDEX IF NOT EXISTS idx_vendors_created ON vendors(created_at);
";

/// Name of the vendor-number counter row in `sequences`.
pub const VENDOR_NUMBER_SEQUENCE: &str = "vendor_number";
