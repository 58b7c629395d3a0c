use crate::authz::{self, Principal};
use crate::clients::{MenuClient, RestaurantClient};
use crate::menu_actor::MenuError;
use crate::model::{
    MenuItemId, NewReview, RestaurantId, Review, ReviewCreate, ReviewFilter, ReviewId,
    ReviewUpdate,
};
use crate::restaurant_actor::RestaurantError;
use crate::review_actor::{ReviewAction, ReviewError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Average rating rounded to one decimal, and the number of reviews.
pub fn rating_summary(reviews: &[Review]) -> (f64, u32) {
    if reviews.is_empty() {
        return (0.0, 0);
    }
    let total: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
    let count = reviews.len() as u32;
    let average = f64::from(total) / f64::from(count);
    ((average * 10.0).round() / 10.0, count)
}

/// Client for interacting with the Review actor.
///
/// Every change to a review recomputes the rating aggregates on the
/// restaurant and menu item it is attached to.
#[derive(Clone)]
pub struct ReviewClient {
    inner: ResourceClient<Review>,
    restaurants: RestaurantClient,
    menu: MenuClient,
}

impl ReviewClient {
    pub fn new(
        inner: ResourceClient<Review>,
        restaurants: RestaurantClient,
        menu: MenuClient,
    ) -> Self {
        Self {
            inner,
            restaurants,
            menu,
        }
    }

    /// Reviews a delivered order the caller placed.
    ///
    /// # Errors
    /// - [`ReviewError::OrderNotEligible`] if the order is missing, someone
    ///   else's, or not delivered.
    /// - [`ReviewError::AlreadyReviewed`] on a second review of the same order.
    #[instrument(skip(self, review), fields(order = %review.order, rating = review.rating))]
    pub async fn create_review(
        &self,
        principal: &Principal,
        review: NewReview,
    ) -> Result<ReviewId, ReviewError> {
        let order = review.order;
        let params = ReviewCreate {
            user: principal.user_id,
            order,
            restaurant: review.restaurant,
            menu_item: review.menu_item,
            rating: review.rating,
            comment: review.comment,
        };
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Duplicate(_) => ReviewError::AlreadyReviewed(order),
            other => Self::map_error(other),
        })?;

        let created = self.require(id).await?;
        self.refresh_ratings(&created).await?;
        info!(%id, "Review created");
        Ok(id)
    }

    async fn require(&self, id: ReviewId) -> Result<Review, ReviewError> {
        self.get(id)
            .await?
            .ok_or_else(|| ReviewError::NotFound(id.to_string()))
    }

    /// Author or admin.
    #[instrument(skip(self))]
    pub async fn update_review(
        &self,
        principal: &Principal,
        id: ReviewId,
        update: ReviewUpdate,
    ) -> Result<Review, ReviewError> {
        let review = self.require(id).await?;
        if !authz::can_modify(principal, &review.user) {
            return Err(ReviewError::Unauthorized(format!("cannot edit {id}")));
        }
        let updated = self
            .inner
            .update(id, update)
            .await
            .map_err(Self::map_error)?;
        self.refresh_ratings(&updated).await?;
        Ok(updated)
    }

    /// Author or admin.
    #[instrument(skip(self))]
    pub async fn delete_review(&self, principal: &Principal, id: ReviewId) -> Result<(), ReviewError> {
        let review = self.require(id).await?;
        if !authz::can_modify(principal, &review.user) {
            return Err(ReviewError::Unauthorized(format!("cannot delete {id}")));
        }
        self.delete(id).await?;
        self.refresh_ratings(&review).await
    }

    /// Shows or hides a review. Admin-only.
    #[instrument(skip(self))]
    pub async fn set_approval(
        &self,
        principal: &Principal,
        id: ReviewId,
        approved: bool,
    ) -> Result<Review, ReviewError> {
        if !principal.is_admin() {
            return Err(ReviewError::Unauthorized("moderating reviews".into()));
        }
        let review = self
            .inner
            .perform_action(id, ReviewAction::SetApproval(approved))
            .await
            .map_err(Self::map_error)?;
        self.refresh_ratings(&review).await?;
        Ok(review)
    }

    /// Approved reviews, newest first.
    pub async fn list_approved(&self) -> Result<Vec<Review>, ReviewError> {
        self.newest_first(ReviewFilter::Approved).await
    }

    pub async fn list_for_restaurant(
        &self,
        restaurant: RestaurantId,
    ) -> Result<Vec<Review>, ReviewError> {
        self.newest_first(ReviewFilter::Restaurant(restaurant)).await
    }

    pub async fn list_for_menu_item(&self, item: MenuItemId) -> Result<Vec<Review>, ReviewError> {
        self.newest_first(ReviewFilter::MenuItem(item)).await
    }

    async fn newest_first(&self, filter: ReviewFilter) -> Result<Vec<Review>, ReviewError> {
        let mut reviews = self.list(filter).await?;
        reviews.reverse();
        Ok(reviews)
    }

    /// Recomputes the aggregates a review counts towards. A restaurant or
    /// menu item deleted since the order was delivered has nothing to update.
    async fn refresh_ratings(&self, review: &Review) -> Result<(), ReviewError> {
        if let Some(restaurant) = review.restaurant {
            let reviews = self.list(ReviewFilter::Restaurant(restaurant)).await?;
            let (rating, count) = rating_summary(&reviews);
            match self.restaurants.record_rating(restaurant, rating, count).await {
                Ok(_) => debug!(%restaurant, rating, count, "Restaurant rating refreshed"),
                Err(RestaurantError::NotFound(_)) => {
                    debug!(%restaurant, "Restaurant gone, rating skipped")
                }
                Err(e) => return Err(e.into()),
            }
        }
        if let Some(item) = review.menu_item {
            let reviews = self.list(ReviewFilter::MenuItem(item)).await?;
            let (rating, count) = rating_summary(&reviews);
            match self.menu.record_rating(item, rating, count).await {
                Ok(_) => debug!(%item, rating, count, "Menu item rating refreshed"),
                Err(MenuError::NotFound(_)) => debug!(%item, "Menu item gone, rating skipped"),
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ActorClient<Review> for ReviewClient {
    type Error = ReviewError;

    fn inner(&self) -> &ResourceClient<Review> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<ReviewError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ReviewError::NotFound(id),
            Err(other) => ReviewError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, UserId};
    use chrono::Utc;

    fn review(rating: u8) -> Review {
        Review {
            id: ReviewId(u32::from(rating)),
            user: UserId(1),
            order: OrderId(1),
            restaurant: None,
            menu_item: None,
            rating,
            comment: String::new(),
            is_approved: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_rating_summary() {
        assert_eq!(rating_summary(&[]), (0.0, 0));
        assert_eq!(rating_summary(&[review(5), review(4)]), (4.5, 2));
        assert_eq!(rating_summary(&[review(5), review(4), review(4)]), (4.3, 3));
    }
}
