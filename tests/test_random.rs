use image::{DynamicImage, ImageFormat, RgbImage};
use mockito::Matcher;
use recipe_finder::app::{apply, perform, update, AppState, Effect, Msg, Phase};
use recipe_finder::{MealDbClient, RecipeSummary, NO_DETAILS};
use std::io::Cursor;

fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::new(width, height))
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)
        .unwrap();
    buf
}

#[test]
fn test_random_recipe_with_thumbnail() {
    let mut server = mockito::Server::new();
    let body = format!(
        r#"{{"meals": [{{
            "strMeal": "Poutine",
            "strCategory": "Miscellaneous",
            "strInstructions": "Fry the potatoes.",
            "strMealThumb": "{}/images/poutine.jpg",
            "strIngredient1": "Potatoes",
            "strMeasure1": "4 large"
        }}]}}"#,
        server.url()
    );
    let _random = server
        .mock("GET", "/random.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create();
    let _image = server
        .mock("GET", "/images/poutine.jpg")
        .with_status(200)
        .with_header("content-type", "image/jpeg")
        .with_body(jpeg(700, 350))
        .create();
    let client = MealDbClient::builder().base_url(server.url()).build().unwrap();

    let mut state = AppState::new("Recipe.txt", "txt");
    state.results = vec![RecipeSummary::new("Untouched")];

    let effect = update(&mut state, Msg::Random);
    assert_eq!(effect, Effect::Random);
    apply(&mut state, perform(&client, effect, 200).unwrap());

    assert_eq!(state.phase, Phase::DetailShown);
    assert!(state
        .details
        .starts_with("Recipe: Poutine\n\nCategory: Miscellaneous\n\nIngredients:\nPotatoes - 4 large\n"));
    let thumb = state.image.as_ref().expect("thumbnail");
    assert_eq!((thumb.image.width(), thumb.image.height()), (200, 100));
    assert_eq!(state.results, vec![RecipeSummary::new("Untouched")]);
}

#[test]
fn test_random_with_empty_meals_shows_placeholder() {
    let mut server = mockito::Server::new();
    let _random = server
        .mock("GET", "/random.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals": []}"#)
        .create();
    let client = MealDbClient::builder().base_url(server.url()).build().unwrap();

    assert!(client.fetch_random().unwrap().is_none());

    let mut state = AppState::new("Recipe.txt", "txt");
    state.details = "Category: Old".to_string();
    let effect = update(&mut state, Msg::Random);
    apply(&mut state, perform(&client, effect, 200).unwrap());

    assert_eq!(state.details, NO_DETAILS);
    assert!(state.image.is_none());
    assert_eq!(state.phase, Phase::DetailShown);
}

#[test]
fn test_broken_thumbnail_clears_image() {
    let mut server = mockito::Server::new();
    let body = format!(
        r#"{{"meals": [{{"strMeal": "Kedgeree", "strCategory": "Seafood", "strMealThumb": "{}/images/missing.jpg"}}]}}"#,
        server.url()
    );
    let _random = server
        .mock("GET", "/random.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create();
    let _image = server.mock("GET", "/images/missing.jpg").with_status(404).create();
    let client = MealDbClient::builder().base_url(server.url()).build().unwrap();

    let mut state = AppState::new("Recipe.txt", "txt");
    let effect = update(&mut state, Msg::Random);
    apply(&mut state, perform(&client, effect, 200).unwrap());

    assert!(state.details.starts_with("Recipe: Kedgeree"));
    assert!(state.image.is_none());
}
