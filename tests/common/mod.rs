//! Shared test fixtures: in-memory repositories and a Unit of Work stub.
//!
//! The in-memory stores implement the repository traits directly so service
//! logic can be exercised without a database. The transaction hook is
//! unsupported here; tests cover everything up to the transactional write.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use laptop_bazaar::domain::{
    Laptop, LaptopUpdate, NewLaptop, NewUser, Order, OrderStatus, OrderWithItems, ProfileUpdate,
    User, WishlistEntry, WishlistItem,
};
use laptop_bazaar::errors::{AppError, AppResult};
use laptop_bazaar::infra::{
    LaptopRepository, OrderRepository, TransactionContext, UnitOfWork, UserRepository,
    WishlistRepository,
};

// =============================================================================
// Builders
// =============================================================================

pub fn test_user(email: &str, is_admin: bool) -> User {
    User {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "unset".to_string(),
        address: None,
        phone_number: None,
        is_admin,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_laptop(name: &str) -> Laptop {
    Laptop {
        id: Uuid::new_v4(),
        name: name.to_string(),
        brand: "Lenovo".to_string(),
        price: 45_000,
        original_price: 55_000,
        image: "https://example.com/laptop.jpg".to_string(),
        description: None,
        processor: "AMD Ryzen 5 5500U".to_string(),
        ram: "8GB".to_string(),
        storage: "256GB SSD".to_string(),
        display: "15.6\" FHD".to_string(),
        os: "Windows 11 Home".to_string(),
        in_stock: true,
        is_new: false,
        rating: 4.1,
        reviews: 334,
        discount: 18,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_order(id: &str, user_id: Uuid, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        user_id,
        user_name: "Test User".to_string(),
        user_email: "shopper@example.com".to_string(),
        phone_number: "9800000000".to_string(),
        delivery_address: "Kathmandu".to_string(),
        payment_method: laptop_bazaar::domain::PaymentMethod::Cod,
        additional_notes: None,
        total_amount: 45_000,
        status,
        estimated_delivery: Utc::now().date_naive(),
        order_date: Utc::now().date_naive(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// =============================================================================
// In-memory repositories
// =============================================================================

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUsers {
    pub fn seed(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn create(&self, data: NewUser) -> AppResult<User> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            address: data.address,
            phone_number: data.phone_number,
            is_admin: false,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, update: ProfileUpdate) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(address) = update.address {
            user.address = Some(address);
        }
        if let Some(phone_number) = update.phone_number {
            user.phone_number = Some(phone_number);
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.users
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

#[derive(Default)]
pub struct InMemoryLaptops {
    laptops: Mutex<HashMap<Uuid, Laptop>>,
}

impl InMemoryLaptops {
    pub fn seed(&self, laptop: Laptop) {
        self.laptops.lock().unwrap().insert(laptop.id, laptop);
    }
}

#[async_trait]
impl LaptopRepository for InMemoryLaptops {
    async fn list(&self) -> AppResult<Vec<Laptop>> {
        Ok(self.laptops.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Laptop>> {
        Ok(self.laptops.lock().unwrap().get(&id).cloned())
    }

    async fn search(&self, query: &str) -> AppResult<Vec<Laptop>> {
        let needle = query.to_lowercase();
        Ok(self
            .laptops
            .lock()
            .unwrap()
            .values()
            .filter(|l| {
                l.name.to_lowercase().contains(&needle)
                    || l.brand.to_lowercase().contains(&needle)
                    || l.processor.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn create(&self, data: NewLaptop) -> AppResult<Laptop> {
        let now = Utc::now();
        let laptop = Laptop {
            id: Uuid::new_v4(),
            name: data.name,
            brand: data.brand,
            price: data.price,
            original_price: data.original_price,
            image: data.image,
            description: data.description,
            processor: data.processor,
            ram: data.ram,
            storage: data.storage,
            display: data.display,
            os: data.os,
            in_stock: data.in_stock,
            is_new: data.is_new,
            rating: data.rating,
            reviews: data.reviews,
            discount: data.discount,
            created_at: now,
            updated_at: now,
        };
        self.laptops.lock().unwrap().insert(laptop.id, laptop.clone());
        Ok(laptop)
    }

    async fn update(&self, id: Uuid, update: LaptopUpdate) -> AppResult<Laptop> {
        let mut laptops = self.laptops.lock().unwrap();
        let laptop = laptops
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Laptop not found"))?;

        if let Some(name) = update.name {
            laptop.name = name;
        }
        if let Some(price) = update.price {
            laptop.price = price;
        }
        if let Some(original_price) = update.original_price {
            laptop.original_price = original_price;
        }
        if let Some(discount) = update.discount {
            laptop.discount = discount;
        }
        if let Some(in_stock) = update.in_stock {
            laptop.in_stock = in_stock;
        }
        laptop.updated_at = Utc::now();
        Ok(laptop.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.laptops
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Laptop not found"))
    }
}

#[derive(Default)]
pub struct InMemoryOrders {
    orders: Mutex<HashMap<String, OrderWithItems>>,
}

impl InMemoryOrders {
    pub fn seed(&self, order: OrderWithItems) {
        self.orders
            .lock()
            .unwrap()
            .insert(order.order.id.clone(), order);
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Order>> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .get(id)
            .map(|o| o.order.clone()))
    }

    async fn find_with_items(&self, id: &str) -> AppResult<Option<OrderWithItems>> {
        Ok(self.orders.lock().unwrap().get(id).cloned())
    }

    async fn list_with_items(&self) -> AppResult<Vec<OrderWithItems>> {
        Ok(self.orders.lock().unwrap().values().cloned().collect())
    }

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<OrderWithItems>> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .values()
            .filter(|o| o.order.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_by_status(&self, status: OrderStatus) -> AppResult<Vec<OrderWithItems>> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .values()
            .filter(|o| o.order.status == status)
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .get_mut(id)
            .ok_or_else(|| AppError::not_found("Order not found"))?;
        order.order.status = status;
        order.order.updated_at = Utc::now();
        Ok(order.order.clone())
    }
}

#[derive(Default)]
pub struct InMemoryWishlists {
    entries: Mutex<Vec<WishlistEntry>>,
}

#[async_trait]
impl WishlistRepository for InMemoryWishlists {
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<WishlistItem>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| WishlistItem {
                entry: e.clone(),
                laptop: None,
            })
            .collect())
    }

    async fn find(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<Option<WishlistEntry>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.user_id == user_id && e.laptop_id == laptop_id)
            .cloned())
    }

    async fn create(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<WishlistEntry> {
        let entry = WishlistEntry {
            id: Uuid::new_v4(),
            user_id,
            laptop_id,
            created_at: Utc::now(),
        };
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn find_with_laptop(&self, id: Uuid) -> AppResult<Option<WishlistItem>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .map(|e| WishlistItem {
                entry: e.clone(),
                laptop: None,
            }))
    }

    async fn delete(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<bool> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| !(e.user_id == user_id && e.laptop_id == laptop_id));
        Ok(entries.len() < before)
    }
}

// =============================================================================
// Unit of Work stub
// =============================================================================

/// Unit of Work over the in-memory repositories. Transactions are not
/// supported; service validation paths run before any transaction starts.
#[derive(Default)]
pub struct TestUnitOfWork {
    pub users: Arc<InMemoryUsers>,
    pub laptops: Arc<InMemoryLaptops>,
    pub orders: Arc<InMemoryOrders>,
    pub wishlists: Arc<InMemoryWishlists>,
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn laptops(&self) -> Arc<dyn LaptopRepository> {
        self.laptops.clone()
    }

    fn orders(&self) -> Arc<dyn OrderRepository> {
        self.orders.clone()
    }

    fn wishlists(&self) -> Arc<dyn WishlistRepository> {
        self.wishlists.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal("Transactions not supported in test stub"))
    }
}
