use std::marker::PhantomData;

use sea_query::{
    Alias, Expr, ExprTrait, Func, Iden, Order, Query, SelectStatement, SqliteQueryBuilder,
};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, SqlitePool};

use crate::{
    Crud, Direction, Error, Page, Pageable, Resource, Result, resource::camel_to_snake,
};

/// Generic table access for a [`Resource`].
pub struct Repository<R> {
    pool: SqlitePool,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> Repository<R> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _resource: PhantomData,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn select() -> SelectStatement {
        Query::select()
            .column(R::ID)
            .columns(R::COLUMNS.iter().copied())
            .from(R::TABLE)
            .to_owned()
    }

    /// Resolves a camelCase sort property to its column.
    ///
    /// Declared references win, then the scalar column of the same name, then
    /// the `{property}_id` foreign key.
    fn sort_column(property: &str) -> Result<R::Column> {
        if let Some(&(_, column)) = R::REFERENCES.iter().find(|&&(name, _)| name == property) {
            return Ok(column);
        }

        let snake = camel_to_snake(property);
        let reference = format!("{snake}_id");
        let find = |name: &str| {
            std::iter::once(R::ID)
                .chain(R::COLUMNS.iter().copied())
                .find(|c| c.to_string() == name)
        };

        find(&snake)
            .or_else(|| find(&reference))
            .ok_or_else(|| {
                Error::bad_request(
                    R::ENTITY_NAME,
                    "sort",
                    format!("Unknown sort property '{property}'"),
                )
            })
    }

    fn is_money(column: R::Column) -> bool {
        let name = column.to_string();
        R::MONEY.iter().any(|c| c.to_string() == name)
    }

    pub async fn find_all(&self, pageable: &Pageable) -> Result<Page<R>> {
        let mut statement = Self::select();
        let mut by_id = false;
        for sort in &pageable.sort {
            let column = Self::sort_column(&sort.property)?;
            by_id |= column.to_string() == R::ID.to_string();
            let order = match sort.direction {
                Direction::Asc => Order::Asc,
                Direction::Desc => Order::Desc,
            };
            if Self::is_money(column) {
                statement.order_by_expr(
                    Func::cast_as(Expr::col(column), Alias::new("REAL")).into(),
                    order,
                );
            } else {
                statement.order_by(column, order);
            }
        }

        if !by_id {
            statement.order_by(R::ID, Order::Asc);
        }

        statement.limit(pageable.size).offset(pageable.offset());

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, R::Row, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        Ok(Page {
            content: rows.into_iter().map(R::from).collect(),
            total: self.count().await?,
            page: pageable.page,
            size: pageable.size,
        })
    }

    /// Rows whose `column` equals `value`, ordered by id.
    pub async fn find_by(
        &self,
        column: R::Column,
        value: impl Into<sea_query::Value>,
    ) -> Result<Vec<R>> {
        let value: sea_query::Value = value.into();
        let statement = Self::select()
            .and_where(Expr::col(column).eq(value))
            .order_by(R::ID, Order::Asc)
            .to_owned();

        self.fetch(statement).await
    }

    pub async fn fetch(&self, statement: SelectStatement) -> Result<Vec<R>> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, R::Row, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(R::from).collect())
    }

    pub fn query() -> SelectStatement {
        Self::select()
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<R>> {
        let statement = Self::select()
            .and_where(Expr::col(R::ID).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, R::Row, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(R::from))
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let statement = Query::select()
            .expr(Func::count(Expr::col(R::ID)))
            .from(R::TABLE)
            .and_where(Expr::col(R::ID).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let count: i64 = sqlx::query_scalar_with(&sql, values)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn count(&self) -> Result<u64> {
        let statement = Query::select()
            .expr(Func::count(Expr::col(R::ID)))
            .from(R::TABLE)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let count: i64 = sqlx::query_scalar_with(&sql, values)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.try_into().unwrap_or_default())
    }

    pub async fn insert(&self, dto: &R) -> Result<R> {
        let mut conn = self.pool.acquire().await?;
        Self::insert_with(&mut conn, dto).await
    }

    /// Inserts on an existing connection, typically inside a transaction.
    pub async fn insert_with(conn: &mut SqliteConnection, dto: &R) -> Result<R> {
        let statement = Query::insert()
            .into_table(R::TABLE)
            .columns(R::COLUMNS.iter().copied())
            .values_panic(dto.values().into_iter().map(Into::into))
            .returning_col(R::ID)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id: i64 = sqlx::query_scalar_with(&sql, values)
            .fetch_one(&mut *conn)
            .await?;

        let mut stored = dto.clone();
        stored.set_id(Some(id));

        Ok(stored)
    }

    pub async fn update(&self, dto: &R) -> Result<R> {
        let mut conn = self.pool.acquire().await?;
        Self::update_with(&mut conn, dto).await
    }

    pub async fn update_with(conn: &mut SqliteConnection, dto: &R) -> Result<R> {
        let Some(id) = dto.id() else {
            return Err(Error::bad_request(R::ENTITY_NAME, "idnull", "Invalid id"));
        };

        let statement = Query::update()
            .table(R::TABLE)
            .values(
                R::COLUMNS
                    .iter()
                    .copied()
                    .zip(dto.values().into_iter().map(Into::into)),
            )
            .and_where(Expr::col(R::ID).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *conn).await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound {
                entity: R::ENTITY_NAME,
            });
        }

        Ok(dto.clone())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        Self::delete_with(&mut conn, id).await
    }

    pub async fn delete_with(conn: &mut SqliteConnection, id: i64) -> Result<()> {
        let statement = Query::delete()
            .from_table(R::TABLE)
            .and_where(Expr::col(R::ID).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *conn).await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl<R: Resource> Crud for Repository<R> {
    type Dto = R;

    #[tracing::instrument(skip_all, fields(entity = R::ENTITY_NAME))]
    async fn save(&self, dto: R) -> Result<R> {
        self.insert(&dto).await
    }

    #[tracing::instrument(skip_all, fields(entity = R::ENTITY_NAME, id = dto.id()))]
    async fn update(&self, dto: R) -> Result<R> {
        Repository::update(self, &dto).await
    }

    async fn find_all(&self, pageable: &Pageable) -> Result<Page<R>> {
        Repository::find_all(self, pageable).await
    }

    async fn find_one(&self, id: i64) -> Result<Option<R>> {
        Repository::find_one(self, id).await
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        Repository::exists(self, id).await
    }

    #[tracing::instrument(skip(self), fields(entity = R::ENTITY_NAME))]
    async fn delete(&self, id: i64) -> Result<()> {
        Repository::delete(self, id).await
    }
}
