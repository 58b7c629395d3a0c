//! [`ActorEntity`] implementation for [`Review`].

use super::{ReviewAction, ReviewError};
use crate::clients::OrderClient;
use crate::model::{
    OrderStatus, Review, ReviewCreate, ReviewFilter, ReviewId, ReviewUpdate, MAX_COMMENT_CHARS,
};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::Utc;

fn validate_rating(rating: u8) -> Result<(), ReviewError> {
    if !(1..=5).contains(&rating) {
        return Err(ReviewError::ValidationError(format!(
            "rating must be 1 to 5, got {rating}"
        )));
    }
    Ok(())
}

fn validate_comment(comment: &str) -> Result<(), ReviewError> {
    if comment.chars().count() > MAX_COMMENT_CHARS {
        return Err(ReviewError::ValidationError(format!(
            "comment exceeds {MAX_COMMENT_CHARS} characters"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Review {
    type Id = ReviewId;
    type Create = ReviewCreate;
    type Update = ReviewUpdate;
    type Action = ReviewAction;
    type ActionResult = Review;
    type Filter = ReviewFilter;
    type Context = OrderClient;
    type Error = ReviewError;

    fn from_create_params(id: ReviewId, params: ReviewCreate) -> Result<Self, Self::Error> {
        validate_rating(params.rating)?;
        validate_comment(&params.comment)?;

        Ok(Self {
            id,
            user: params.user,
            order: params.order,
            restaurant: params.restaurant,
            menu_item: params.menu_item,
            rating: params.rating,
            comment: params.comment,
            is_approved: true,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &ReviewFilter) -> bool {
        self.is_approved
            && match filter {
                ReviewFilter::Approved => true,
                ReviewFilter::Restaurant(restaurant) => self.restaurant == Some(*restaurant),
                ReviewFilter::MenuItem(item) => self.menu_item == Some(*item),
            }
    }

    /// One review per user and order.
    fn conflicts_with(&self, existing: &Self) -> bool {
        self.user == existing.user && self.order == existing.order
    }

    /// Checks the order with the order actor and links the review to the
    /// order's restaurant when none was given.
    async fn on_create(&mut self, orders: &OrderClient) -> Result<(), Self::Error> {
        let order = orders
            .get(self.order)
            .await?
            .filter(|order| {
                order.customer == self.user && order.details.status == OrderStatus::Delivered
            })
            .ok_or(ReviewError::OrderNotEligible(self.order))?;

        match self.restaurant {
            Some(restaurant) if restaurant != order.details.restaurant => {
                return Err(ReviewError::ValidationError(format!(
                    "{} was not ordered from {restaurant}",
                    self.order
                )));
            }
            Some(_) => {}
            None => self.restaurant = Some(order.details.restaurant),
        }

        if let Some(item) = self.menu_item {
            if !order.details.items.iter().any(|line| line.menu_item == item) {
                return Err(ReviewError::ValidationError(format!(
                    "{item} is not part of {}",
                    self.order
                )));
            }
        }
        Ok(())
    }

    async fn on_update(&mut self, update: ReviewUpdate, _orders: &OrderClient) -> Result<(), Self::Error> {
        if let Some(rating) = update.rating {
            validate_rating(rating)?;
        }
        if let Some(comment) = &update.comment {
            validate_comment(comment)?;
        }

        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(comment) = update.comment {
            self.comment = comment;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ReviewAction,
        _orders: &OrderClient,
    ) -> Result<Review, Self::Error> {
        match action {
            ReviewAction::SetApproval(approved) => self.is_approved = approved,
        }
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, UserId};

    fn params(rating: u8, comment: &str) -> ReviewCreate {
        ReviewCreate {
            user: UserId(1),
            order: OrderId(1),
            restaurant: None,
            menu_item: None,
            rating,
            comment: comment.into(),
        }
    }

    #[test]
    fn test_rating_bounds() {
        for rating in [0, 6] {
            assert!(matches!(
                Review::from_create_params(ReviewId(1), params(rating, "ok")),
                Err(ReviewError::ValidationError(_))
            ));
        }
        assert!(Review::from_create_params(ReviewId(1), params(1, "")).is_ok());
        assert!(Review::from_create_params(ReviewId(1), params(5, "")).is_ok());
    }

    #[test]
    fn test_comment_length_counts_characters() {
        let at_limit = "é".repeat(MAX_COMMENT_CHARS);
        assert!(Review::from_create_params(ReviewId(1), params(4, &at_limit)).is_ok());

        let over = "x".repeat(MAX_COMMENT_CHARS + 1);
        assert!(Review::from_create_params(ReviewId(1), params(4, &over)).is_err());
    }

    #[test]
    fn test_one_review_per_user_and_order() {
        let first = Review::from_create_params(ReviewId(1), params(4, "")).unwrap();
        let again = Review::from_create_params(ReviewId(2), params(2, "")).unwrap();
        assert!(again.conflicts_with(&first));

        let mut other_user = params(2, "");
        other_user.user = UserId(2);
        let other = Review::from_create_params(ReviewId(3), other_user).unwrap();
        assert!(!other.conflicts_with(&first));
    }

    #[test]
    fn test_hidden_reviews_are_not_listed() {
        let mut review = Review::from_create_params(ReviewId(1), params(3, "")).unwrap();
        assert!(review.matches(&ReviewFilter::Approved));
        review.is_approved = false;
        assert!(!review.matches(&ReviewFilter::Approved));
    }
}
