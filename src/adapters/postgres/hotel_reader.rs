//! PostgreSQL implementation of HotelReader.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, HotelId, RoomId};
use crate::domain::hotel::{Hotel, HotelWithRooms, Room};
use crate::ports::HotelReader;

use super::utc_timestamp;

/// PostgreSQL implementation of the HotelReader port.
#[derive(Clone)]
pub struct PostgresHotelReader {
    pool: PgPool,
}

impl PostgresHotelReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct HotelRow {
    id: i32,
    name: String,
    image: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

#[derive(Debug, sqlx::FromRow)]
struct RoomRow {
    id: i32,
    name: String,
    capacity: i32,
    hotel_id: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl TryFrom<HotelRow> for Hotel {
    type Error = DomainError;

    fn try_from(row: HotelRow) -> Result<Self, Self::Error> {
        Ok(Hotel {
            id: HotelId::new(row.id)?,
            name: row.name,
            image: row.image,
            created_at: utc_timestamp(row.created_at),
            updated_at: utc_timestamp(row.updated_at),
        })
    }
}

impl TryFrom<RoomRow> for Room {
    type Error = DomainError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        Ok(Room {
            id: RoomId::new(row.id)?,
            hotel_id: HotelId::new(row.hotel_id)?,
            name: row.name,
            capacity: row.capacity,
            created_at: utc_timestamp(row.created_at),
            updated_at: utc_timestamp(row.updated_at),
        })
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", context, e))
}

#[async_trait]
impl HotelReader for PostgresHotelReader {
    async fn find_all(&self) -> Result<Vec<Hotel>, DomainError> {
        let rows: Vec<HotelRow> = sqlx::query_as(
            r#"
            SELECT id, name, image, "createdAt" AS created_at, "updatedAt" AS updated_at
            FROM "Hotel"
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list hotels", e))?;

        rows.into_iter().map(Hotel::try_from).collect()
    }

    async fn find_with_rooms(
        &self,
        hotel_id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        let hotel_row: Option<HotelRow> = sqlx::query_as(
            r#"
            SELECT id, name, image, "createdAt" AS created_at, "updatedAt" AS updated_at
            FROM "Hotel"
            WHERE id = $1
            "#,
        )
        .bind(hotel_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch hotel", e))?;

        let Some(hotel_row) = hotel_row else {
            return Ok(None);
        };

        let room_rows: Vec<RoomRow> = sqlx::query_as(
            r#"
            SELECT id, name, capacity, "hotelId" AS hotel_id,
                   "createdAt" AS created_at, "updatedAt" AS updated_at
            FROM "Room"
            WHERE "hotelId" = $1
            ORDER BY id ASC
            "#,
        )
        .bind(hotel_id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch rooms", e))?;

        let rooms = room_rows
            .into_iter()
            .map(Room::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(HotelWithRooms {
            hotel: Hotel::try_from(hotel_row)?,
            rooms,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, 5)
            .unwrap()
            .and_hms_milli_opt(12, 30, 0, 250)
            .unwrap()
    }

    #[test]
    fn hotel_row_converts_with_utc_timestamps() {
        let hotel = Hotel::try_from(HotelRow {
            id: 4,
            name: "Copacabana Palace".to_string(),
            image: "https://img.example.com/cp.jpg".to_string(),
            created_at: naive(),
            updated_at: naive(),
        })
        .unwrap();

        assert_eq!(hotel.id.as_i32(), 4);
        assert_eq!(hotel.created_at.to_iso_string(), "2023-01-05T12:30:00.250Z");
    }

    #[test]
    fn room_row_with_non_positive_id_is_rejected() {
        let result = Room::try_from(RoomRow {
            id: 0,
            name: "Broken".to_string(),
            capacity: 1,
            hotel_id: 1,
            created_at: naive(),
            updated_at: naive(),
        });

        assert!(result.is_err());
    }
}
