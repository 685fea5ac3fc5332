//! Plan repository interface

use async_trait::async_trait;

use super::phone_plan::{PhoneNumber, PhonePlan};
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait PlanRepository: Send + Sync {
    async fn find_by_id(&self, plan_id: i32) -> DomainResult<Option<PhonePlan>>;
    async fn find_all(&self) -> DomainResult<Vec<PhonePlan>>;
    async fn save(&self, plan: PhonePlan) -> DomainResult<()>;
    async fn find_phone_number(&self, phone_number: &str) -> DomainResult<Option<PhoneNumber>>;
    async fn assign_phone_number(&self, number: PhoneNumber) -> DomainResult<()>;
}
