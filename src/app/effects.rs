use log::{debug, warn};

use super::{Effect, LoadedRecipe, Outcome};
use crate::exporter::export_details;
use crate::formatter::{format_random, render_detail};
use crate::model::MealLookup;
use crate::thumbnail::{decode_thumbnail, Thumbnail};
use crate::RecipeSource;

/// Run an effect. Blocks until any network or file work is done.
pub fn perform<S: RecipeSource + ?Sized>(
    source: &S,
    effect: Effect,
    thumbnail_size: u32,
) -> Option<Outcome> {
    match effect {
        Effect::None | Effect::Quit => None,
        Effect::Search(query) => Some(Outcome::Searched(source.search_by_name(&query))),
        Effect::Lookup(name) => Some(Outcome::Looked(source.lookup(&name).map(|found| {
            found.map(|lookup| {
                let details = render_detail(&lookup.detail);
                load_recipe(source, &lookup, details, thumbnail_size)
            })
        }))),
        Effect::Random => Some(Outcome::Randomized(source.fetch_random().map(|found| {
            found.map(|lookup| {
                let details = format_random(&lookup);
                load_recipe(source, &lookup, details, thumbnail_size)
            })
        }))),
        Effect::Export { path, text } => {
            Some(Outcome::Exported(export_details(&path, &text).map(|()| path)))
        }
    }
}

/// Pair formatted details with the meal's thumbnail.
///
/// An empty URL or an image that fails to download or decode yields no
/// thumbnail, so the image area is cleared instead of showing a stale one.
pub fn load_recipe<S: RecipeSource + ?Sized>(
    source: &S,
    lookup: &MealLookup,
    details: String,
    thumbnail_size: u32,
) -> LoadedRecipe {
    if lookup.image.is_empty() {
        debug!("{} has no thumbnail", lookup.name);
        return LoadedRecipe {
            details,
            image: None,
        };
    }

    let url = lookup.image.url.clone();
    let image = source
        .fetch_image(&url)
        .and_then(|bytes| decode_thumbnail(&bytes, thumbnail_size))
        .map_err(|e| warn!("Thumbnail for {} unavailable: {}", lookup.name, e))
        .ok()
        .map(|image| Thumbnail { url, image });

    LoadedRecipe { details, image }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MealRecord, RecipeSummary};
    use crate::FinderError;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use serde_json::json;
    use std::cell::RefCell;
    use std::io::Cursor;

    /// In-memory backend that records what was asked of it
    struct FakeSource {
        meal: Option<MealRecord>,
        image: Option<Vec<u8>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeSource {
        fn new(meal: Option<MealRecord>, image: Option<Vec<u8>>) -> Self {
            Self {
                meal,
                image,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl RecipeSource for FakeSource {
        fn search_by_name(&self, query: &str) -> Result<Vec<RecipeSummary>, FinderError> {
            self.calls.borrow_mut().push(format!("search:{query}"));
            Ok(match &self.meal {
                Some(meal) => vec![RecipeSummary::new(meal.name.clone())],
                None => vec![RecipeSummary::placeholder()],
            })
        }

        fn lookup(&self, query: &str) -> Result<Option<MealLookup>, FinderError> {
            self.calls.borrow_mut().push(format!("lookup:{query}"));
            Ok(self.meal.as_ref().map(MealLookup::from))
        }

        fn fetch_random(&self) -> Result<Option<MealLookup>, FinderError> {
            self.calls.borrow_mut().push("random".to_string());
            Ok(self.meal.as_ref().map(MealLookup::from))
        }

        fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FinderError> {
            self.calls.borrow_mut().push(format!("image:{url}"));
            Ok(self.image.clone().unwrap_or_default())
        }
    }

    fn meal(thumb: &str) -> MealRecord {
        serde_json::from_value(json!({
            "strMeal": "Kumpir",
            "strCategory": "Side",
            "strMealThumb": thumb,
            "strInstructions": "Bake the potatoes.",
            "strIngredient1": "potatoes",
            "strMeasure1": "2 large",
        }))
        .unwrap()
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_lookup_fetches_detail_and_image_once() {
        let source = FakeSource::new(Some(meal("http://img/kumpir.png")), Some(png(400, 400)));
        let outcome = perform(&source, Effect::Lookup("Kumpir".to_string()), 200);

        let Some(Outcome::Looked(Ok(Some(loaded)))) = outcome else {
            panic!("unexpected outcome");
        };
        assert!(loaded.details.starts_with("Category: Side\n\nIngredients:\npotatoes - 2 large\n"));
        let thumb = loaded.image.expect("thumbnail");
        assert_eq!((thumb.image.width(), thumb.image.height()), (200, 200));
        assert_eq!(
            *source.calls.borrow(),
            vec!["lookup:Kumpir".to_string(), "image:http://img/kumpir.png".to_string()]
        );
    }

    #[test]
    fn test_missing_thumbnail_skips_image_request() {
        let source = FakeSource::new(Some(meal("")), None);
        let outcome = perform(&source, Effect::Random, 200);

        let Some(Outcome::Randomized(Ok(Some(loaded)))) = outcome else {
            panic!("unexpected outcome");
        };
        assert!(loaded.details.starts_with("Recipe: Kumpir\n\n"));
        assert!(loaded.image.is_none());
        assert_eq!(*source.calls.borrow(), vec!["random".to_string()]);
    }

    #[test]
    fn test_undecodable_image_clears_thumbnail() {
        let source = FakeSource::new(Some(meal("http://img/broken")), Some(b"oops".to_vec()));
        let Some(Outcome::Looked(Ok(Some(loaded)))) =
            perform(&source, Effect::Lookup("Kumpir".to_string()), 200)
        else {
            panic!("expected a loaded recipe");
        };
        assert!(loaded.image.is_none());
    }

    #[test]
    fn test_random_without_meals_is_none() {
        let source = FakeSource::new(None, None);
        let outcome = perform(&source, Effect::Random, 200);
        assert!(matches!(outcome, Some(Outcome::Randomized(Ok(None)))));
    }

    #[test]
    fn test_none_and_quit_do_nothing() {
        let source = FakeSource::new(None, None);
        assert!(perform(&source, Effect::None, 200).is_none());
        assert!(perform(&source, Effect::Quit, 200).is_none());
        assert!(source.calls.borrow().is_empty());
    }
}
