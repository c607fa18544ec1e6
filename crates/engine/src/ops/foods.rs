use chrono::Utc;
use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    EngineError, Food, FoodCmd, Page, PageRequest, ResultEngine, foods,
    pagination::list_page,
    util::{normalize_optional_text, require, validate_len, validate_price},
};

use super::{Engine, with_tx};

struct FoodPatch {
    name: Option<String>,
    price: Option<f64>,
    food_image: Option<String>,
    menu_id: Option<String>,
}

impl FoodPatch {
    fn validate(cmd: FoodCmd) -> ResultEngine<Self> {
        let name = normalize_optional_text(cmd.name);
        if let Some(name) = &name {
            validate_len(name, "name", 2, 100)?;
        }

        Ok(Self {
            name,
            price: cmd
                .price
                .map(|price| validate_price(price, "price"))
                .transpose()?,
            food_image: normalize_optional_text(cmd.food_image),
            menu_id: normalize_optional_text(cmd.menu_id),
        })
    }
}

impl Engine {
    /// Add a food to the catalog. The menu must exist; the price is normalized.
    pub async fn create_food(&self, cmd: FoodCmd) -> ResultEngine<Food> {
        let patch = FoodPatch::validate(cmd)?;
        let food = Food::new(
            require(patch.name, "name")?,
            require(patch.price, "price")?,
            require(patch.food_image, "food_image")?,
            require(patch.menu_id, "menu_id")?,
            Utc::now(),
        );

        self.bounded(async move {
            with_tx!(self, |db_tx| {
                self.require_menu(&db_tx, &food.menu_id).await?;
                foods::ActiveModel::from(&food).insert(&db_tx).await?;
                tracing::info!("created food {} ({})", food.name, food.food_id);
                Ok(food)
            })
        })
        .await
    }

    pub async fn food(&self, food_id: &str) -> ResultEngine<Food> {
        self.bounded(async move {
            foods::Entity::find_by_id(food_id.to_string())
                .one(&self.database)
                .await?
                .map(Food::from)
                .ok_or_else(|| EngineError::KeyNotFound(format!("food {food_id}")))
        })
        .await
    }

    pub async fn foods(&self, request: PageRequest) -> ResultEngine<Page<Food>> {
        self.bounded(async move {
            with_tx!(self, |db_tx| {
                let select = foods::Entity::find()
                    .order_by_asc(foods::Column::CreatedAt)
                    .order_by_asc(foods::Column::FoodId);
                list_page(&db_tx, select, request)
                    .await
                    .map(|page| page.map(Food::from))
            })
        })
        .await
    }

    /// Patch a food. A new `menu_id` must exist; a new price is normalized.
    ///
    /// A missing food is created when every field is given.
    pub async fn update_food(&self, food_id: &str, cmd: FoodCmd) -> ResultEngine<Food> {
        let patch = FoodPatch::validate(cmd)?;
        let now = Utc::now();

        self.bounded(async move {
            with_tx!(self, |db_tx| {
                if let Some(menu_id) = &patch.menu_id {
                    self.require_menu(&db_tx, menu_id).await?;
                }

                match foods::Entity::find_by_id(food_id.to_string())
                    .one(&db_tx)
                    .await?
                {
                    Some(model) => {
                        let mut active: foods::ActiveModel = model.into();
                        if let Some(name) = patch.name {
                            active.name = ActiveValue::Set(name);
                        }
                        if let Some(price) = patch.price {
                            active.price = ActiveValue::Set(price);
                        }
                        if let Some(food_image) = patch.food_image {
                            active.food_image = ActiveValue::Set(food_image);
                        }
                        if let Some(menu_id) = patch.menu_id {
                            active.menu_id = ActiveValue::Set(menu_id);
                        }
                        active.updated_at = ActiveValue::Set(now);
                        let model = active.update(&db_tx).await?;
                        Ok(Food::from(model))
                    }
                    None => match (patch.name, patch.price, patch.food_image, patch.menu_id) {
                        (Some(name), Some(price), Some(food_image), Some(menu_id)) => {
                            let food = Food::with_id(
                                food_id.to_string(),
                                name,
                                price,
                                food_image,
                                menu_id,
                                now,
                            );
                            foods::ActiveModel::from(&food).insert(&db_tx).await?;
                            tracing::info!("created food {food_id} on update");
                            Ok(food)
                        }
                        _ => Err(EngineError::KeyNotFound(format!("food {food_id}"))),
                    },
                }
            })
        })
        .await
    }
}
