//! In-Memory Record Store Adapter
//!
//! Implements every record store port over in-process maps.
//! Useful for testing and local development without PostgreSQL.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::enrollment::Enrollment;
use crate::domain::foundation::{DomainError, EnrollmentId, HotelId, UserId};
use crate::domain::hotel::{Hotel, HotelWithRooms, Room};
use crate::domain::ticket::Ticket;
use crate::ports::{EnrollmentReader, HotelReader, SessionReader, TicketReader};

#[derive(Debug, Default)]
struct Records {
    enrollments: HashMap<UserId, Enrollment>,
    tickets: HashMap<EnrollmentId, Ticket>,
    hotels: BTreeMap<HotelId, Hotel>,
    rooms: Vec<Room>,
    sessions: HashSet<(UserId, String)>,
}

/// In-memory implementation of the enrollment, ticket, hotel and session readers.
///
/// Clones share the same underlying records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<Records>>,
    fail_reads: Arc<AtomicBool>,
}

impl InMemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an enrollment, replacing any previous one for the same user.
    pub async fn insert_enrollment(&self, enrollment: Enrollment) {
        self.records
            .write()
            .await
            .enrollments
            .insert(enrollment.user_id, enrollment);
    }

    /// Store a ticket, replacing any previous one for the same enrollment.
    pub async fn insert_ticket(&self, ticket: Ticket) {
        self.records
            .write()
            .await
            .tickets
            .insert(ticket.enrollment_id, ticket);
    }

    pub async fn insert_hotel(&self, hotel: Hotel) {
        self.records.write().await.hotels.insert(hotel.id, hotel);
    }

    pub async fn insert_room(&self, room: Room) {
        self.records.write().await.rooms.push(room);
    }

    /// Open a session so that `token` is accepted for `user_id`.
    pub async fn insert_session(&self, user_id: UserId, token: impl Into<String>) {
        self.records
            .write()
            .await
            .sessions
            .insert((user_id, token.into()));
    }

    /// Make every subsequent read fail with a database error.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::database("In-memory store configured to fail"));
        }
        Ok(())
    }
}

#[async_trait]
impl EnrollmentReader for InMemoryRecordStore {
    async fn find_with_address_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Enrollment>, DomainError> {
        self.check_available()?;
        Ok(self.records.read().await.enrollments.get(user_id).cloned())
    }
}

#[async_trait]
impl TicketReader for InMemoryRecordStore {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        self.check_available()?;
        Ok(self.records.read().await.tickets.get(enrollment_id).cloned())
    }
}

#[async_trait]
impl HotelReader for InMemoryRecordStore {
    async fn find_all(&self) -> Result<Vec<Hotel>, DomainError> {
        self.check_available()?;
        Ok(self.records.read().await.hotels.values().cloned().collect())
    }

    async fn find_with_rooms(
        &self,
        hotel_id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        self.check_available()?;
        let records = self.records.read().await;

        let Some(hotel) = records.hotels.get(hotel_id).cloned() else {
            return Ok(None);
        };

        let mut rooms: Vec<Room> = records
            .rooms
            .iter()
            .filter(|r| r.hotel_id == *hotel_id)
            .cloned()
            .collect();
        rooms.sort_by_key(|r| r.id);

        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}

#[async_trait]
impl SessionReader for InMemoryRecordStore {
    async fn exists(&self, user_id: &UserId, token: &str) -> Result<bool, DomainError> {
        self.check_available()?;
        Ok(self
            .records
            .read()
            .await
            .sessions
            .contains(&(*user_id, token.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RoomId, Timestamp};

    fn hotel(id: i32) -> Hotel {
        Hotel {
            id: HotelId::new(id).unwrap(),
            name: format!("Hotel {}", id),
            image: format!("https://img.example.com/{}.jpg", id),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    fn room(id: i32, hotel_id: i32) -> Room {
        Room {
            id: RoomId::new(id).unwrap(),
            hotel_id: HotelId::new(hotel_id).unwrap(),
            name: "Suite".to_string(),
            capacity: 2,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn find_all_returns_hotels_in_id_order() {
        let store = InMemoryRecordStore::new();
        store.insert_hotel(hotel(3)).await;
        store.insert_hotel(hotel(1)).await;
        store.insert_hotel(hotel(2)).await;

        let ids: Vec<i32> = store
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|h| h.id.as_i32())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn find_with_rooms_only_includes_own_rooms_sorted() {
        let store = InMemoryRecordStore::new();
        store.insert_hotel(hotel(1)).await;
        store.insert_hotel(hotel(2)).await;
        store.insert_room(room(5, 1)).await;
        store.insert_room(room(4, 2)).await;
        store.insert_room(room(2, 1)).await;

        let found = store
            .find_with_rooms(&HotelId::new(1).unwrap())
            .await
            .unwrap()
            .unwrap();
        let room_ids: Vec<i32> = found.rooms.iter().map(|r| r.id.as_i32()).collect();
        assert_eq!(room_ids, vec![2, 5]);
    }

    #[tokio::test]
    async fn find_with_rooms_returns_none_for_unknown_hotel() {
        let store = InMemoryRecordStore::new();
        let found = store.find_with_rooms(&HotelId::new(9).unwrap()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn session_exists_matches_user_and_token() {
        let store = InMemoryRecordStore::new();
        let user = UserId::new(1).unwrap();
        store.insert_session(user, "abc").await;

        assert!(store.exists(&user, "abc").await.unwrap());
        assert!(!store.exists(&user, "other").await.unwrap());
        assert!(!store.exists(&UserId::new(2).unwrap(), "abc").await.unwrap());
    }

    #[tokio::test]
    async fn failing_store_returns_database_error() {
        let store = InMemoryRecordStore::new();
        store.set_fail_reads(true);

        let err = store.find_all().await.unwrap_err();
        assert_eq!(err.code, crate::domain::foundation::ErrorCode::DatabaseError);
    }

    #[tokio::test]
    async fn clones_share_records() {
        let store = InMemoryRecordStore::new();
        let clone = store.clone();
        clone.insert_hotel(hotel(1)).await;

        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }
}
