use anyhow::Result;
use sea_orm::sqlx::{sqlite::SqliteConnection, Connection};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
    Schema,
};
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::entities::{member, team};

/// Owner of the database connection pool.
pub struct Storage {
    pub(crate) conn: DatabaseConnection,
    _anchor: SqliteConnection,
}

impl Storage {
    /// Open the database at `url` and make sure the schema exists.
    pub async fn connect(url: &str) -> Result<Self> {
        let mut options = ConnectOptions::new(url.to_owned());
        options
            .min_connections(1)
            .max_connections(4)
            .sqlx_logging(false);

        let conn = Database::connect(options).await?;

        // Anchor connection outside the pool: the pool reaps idle connections,
        // and a shared-cache in-memory database dies with its last open handle.
        let anchor = SqliteConnection::connect(url).await?;

        let storage = Storage {
            conn,
            _anchor: anchor,
        };
        storage.init_schema().await?;

        log::debug!("storage ready at {url}");
        Ok(storage)
    }

    /// Open a private in-memory database.
    ///
    /// Shared-cache URIs get a unique name per call so parallel tests never
    /// see each other's rows.
    pub async fn in_memory() -> Result<Self> {
        let name = Uuid::new_v4().simple().to_string();
        let url = format!("sqlite:file:rosterdb_{name}?mode=memory&cache=shared");
        Self::connect(&url).await
    }

    /// Open per the configuration: a file-backed database when a URL is set,
    /// an in-memory one otherwise.
    pub async fn from_config(config: &StorageConfig) -> Result<Self> {
        match &config.url {
            Some(url) => Self::connect(url).await,
            None => Self::in_memory().await,
        }
    }

    /// Borrow the live connection; `begin()` on it for a transaction scope.
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Create the tables from the entity definitions.
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        // Teams first: members carry the foreign key.
        let mut teams = schema.create_table_from_entity(team::Entity);
        teams.if_not_exists();
        self.conn.execute(backend.build(&teams)).await?;

        let mut members = schema.create_table_from_entity(member::Entity);
        members.if_not_exists();
        self.conn.execute(backend.build(&members)).await?;

        Ok(())
    }

    /// Check whether any members are stored.
    pub async fn has_data(&self) -> Result<bool> {
        Ok(member::Entity::find().count(&self.conn).await? > 0)
    }

    /// Clear all data, members before teams to honor the foreign key.
    pub async fn clear_all(&self) -> Result<()> {
        member::Entity::delete_many().exec(&self.conn).await?;
        team::Entity::delete_many().exec(&self.conn).await?;
        Ok(())
    }
}
