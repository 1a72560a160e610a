use sqlx_migrator::{Info, Migrator};

mod m0_1;
mod m0_2;
mod m0_3;
mod m0_4;
pub mod table;

pub fn migrator<DB: sqlx::Database>() -> Result<Migrator<DB>, sqlx_migrator::Error>
where
    m0_1::Migration: sqlx_migrator::Migration<DB>,
    m0_2::Migration: sqlx_migrator::Migration<DB>,
    m0_3::Migration: sqlx_migrator::Migration<DB>,
    m0_4::Migration: sqlx_migrator::Migration<DB>,
{
    let mut migrator = Migrator::<DB>::default();
    migrator.add_migrations(vec![
        Box::new(m0_1::Migration),
        Box::new(m0_2::Migration),
        Box::new(m0_3::Migration),
        Box::new(m0_4::Migration),
    ])?;

    Ok(migrator)
}
