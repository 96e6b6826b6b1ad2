//! Integration tests for the backend client using wiremock mock servers

use nutri_core::{
    Client, ClientError, Credentials, FileStore, HEALTH_ANALYSIS_FAILURE, MountedView,
    NutritionApi, NutritionApp, NutritionProfile, RecipeInput, RecipeQuery, SharedStore, View,
};

use std::sync::Arc;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path, query_param},
};

fn user_json(id: i64, username: &str) -> serde_json::Value {
    json!({
        "id": id,
        "username": username,
        "password": "$2a$10$hash",
        "weightKg": 60.0,
        "heightCm": 165.0,
        "age": 29,
        "gender": "F",
        "activityLevel": "Active",
        "healthGoals": "Gain Muscle",
        "dietaryRestrictions": "Vegetarian"
    })
}

fn start_app(server: &MockServer, dir: &tempfile::TempDir) -> NutritionApp {
    let store: SharedStore = Arc::new(FileStore::open(dir.path()).unwrap());
    NutritionApp::start(Arc::new(Client::new(&server.uri())), store)
}

#[tokio::test]
async fn test_login_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_partial_json(json!({ "username": "ada", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(7, "ada")))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let user = client.login(&Credentials::new("ada", "pw")).await.unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.username, "ada");
    assert_eq!(user.profile.dietary_restrictions, "Vegetarian");
}

#[tokio::test]
async fn test_login_invalid_credentials_leaves_session_anonymous() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let mut app = start_app(&mock_server, &dir);

    let state = app.login("ada", "wrong").await;
    assert_eq!(state.error(), Some("Invalid credentials"));

    assert!(!app.session().is_authenticated());
    assert!(!dir.path().join("user.json").exists());
}

#[tokio::test]
async fn test_login_persists_session_across_restart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(7, "ada")))
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let mut app = start_app(&mock_server, &dir);
    app.login("ada", "pw").await;

    let mut restarted = start_app(&mock_server, &dir);
    assert_eq!(restarted.session().user_id(), Some(7));

    restarted.logout();
    let after_logout = start_app(&mock_server, &dir);
    assert!(!after_logout.session().is_authenticated());
}

#[tokio::test]
async fn test_register_username_taken() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Username already exists"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let mut app = start_app(&mock_server, &dir);

    let state = app
        .register("ada", "pw", NutritionProfile::default())
        .await;

    assert_eq!(state.error(), Some("Username already exists"));
}

#[tokio::test]
async fn test_health_payload_normalizes_partial_profile() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/health/analyze"))
        .and(body_partial_json(json!({
            "weightKg": 70.0,
            "heightCm": 170.0,
            "age": 30,
            "gender": "F",
            "dietaryRestrictions": "None"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bmi": "24.22",
            "bmiCategory": "Normal weight",
            "dailyCalorieNeeds": 2100
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let mut app = start_app(&mock_server, &dir);
    let draft: NutritionProfile =
        serde_json::from_value(json!({ "weightKg": "", "age": "30", "gender": "F" })).unwrap();
    app.save_profile(draft).unwrap();

    let mounted = app.submit_active().await;

    match mounted {
        MountedView::Health(orchestrator) => {
            let report = orchestrator.state().result().unwrap();
            assert_eq!(report.bmi, 24.22);
            assert_eq!(report.bmi_category, "Normal weight");
        }
        _ => panic!("expected health view"),
    }
}

#[tokio::test]
async fn test_health_rejection_surfaces_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/health/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "Invalid Profile Data: Height and Weight must be positive."
        })))
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let mut app = start_app(&mock_server, &dir);

    let mounted = app.submit_active().await;

    assert_eq!(
        mounted.error(),
        Some("Invalid Profile Data: Height and Weight must be positive.")
    );
}

#[tokio::test]
async fn test_health_server_error_uses_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/health/analyze"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let mut app = start_app(&mock_server, &dir);

    let mounted = app.submit_active().await;

    assert_eq!(mounted.error(), Some(HEALTH_ANALYSIS_FAILURE));
}

#[tokio::test]
async fn test_authenticated_requests_carry_user_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(7, "ada")))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/meal-plan/generate"))
        .and(query_param("userId", "7"))
        .and(body_partial_json(json!({ "healthGoals": "Gain Muscle", "age": 29 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "goal": "Gain Muscle",
            "totalDailyCalories": 2600,
            "suggestion": "Add a protein shake",
            "meals": [
                { "name": "Eggs", "type": "Breakfast", "calories": 500, "macros": "P30" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let mut app = start_app(&mock_server, &dir);
    app.login("ada", "pw").await;
    app.navigate(View::MealPlan);

    let mounted = app.submit_active().await;

    match mounted {
        MountedView::MealPlan(orchestrator) => {
            let plan = orchestrator.state().result().unwrap();
            assert_eq!(plan.goal.as_deref(), Some("Gain Muscle"));
            assert_eq!(plan.meals.len(), 1);
        }
        _ => panic!("expected meal plan view"),
    }
}

#[tokio::test]
async fn test_diet_recommendation_next_meal_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/diet/recommend"))
        .and(body_partial_json(json!({
            "foodItem": "Pizza",
            "mealType": "Lunch",
            "userProfile": { "weightKg": 70.0 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "caloriesConsumedEstimate": 800,
            "caloriesRemaining": 1200,
            "nutritionalAnalysis": "High in fat",
            "nextMealSuggestion": "Steamed vegetables"
        })))
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let mut app = start_app(&mock_server, &dir);
    app.navigate(View::Diet);
    if let MountedView::Diet(orchestrator) = app.mounted_mut() {
        orchestrator.input_mut().food_item = String::from("Pizza");
    }

    let mounted = app.submit_active().await;

    match mounted {
        MountedView::Diet(orchestrator) => {
            let recommendation = orchestrator.state().result().unwrap();
            assert!(!recommendation.guidance.is_day_plan());
            assert_eq!(recommendation.calories_remaining, 1200.0);
        }
        _ => panic!("expected diet view"),
    }
}

#[tokio::test]
async fn test_recipe_query_defaults_cuisine_to_any() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/generate"))
        .and(query_param("ingredients", "egg,rice"))
        .and(query_param("cuisine", "any"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Egg fried rice",
            "cuisineType": "Chinese",
            "calories": 520,
            "ingredients": ["egg", "rice"],
            "instructions": "Fry it.",
            "imageUrl": "https://img.example/rice.png"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let input = RecipeInput {
        ingredients: String::from("egg, rice"),
        cuisine: String::new(),
    };
    let recipe = client
        .generate_recipe(&RecipeQuery::new(&input, None))
        .await
        .unwrap();

    assert_eq!(recipe.title, "Egg fried rice");
    assert_eq!(recipe.image_url.as_deref(), Some("https://img.example/rice.png"));
}

#[tokio::test]
async fn test_sync_profile_puts_normalized_profile() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(7, "ada")))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/auth/profile/7"))
        .and(body_partial_json(json!({ "weightKg": 58.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "username": "ada",
            "weightKg": 58.0,
            "heightCm": 165.0,
            "age": 29,
            "gender": "F",
            "activityLevel": "Active",
            "healthGoals": "Lose Weight",
            "dietaryRestrictions": "Vegetarian"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let mut app = start_app(&mock_server, &dir);
    app.login("ada", "pw").await;
    let mut draft = app.profile();
    draft.weight_kg = 58.0.into();
    app.save_profile(draft).unwrap();

    let session = app.sync_profile().await.unwrap();

    let profile = session.profile().unwrap();
    assert_eq!(profile.health_goals.as_str(), "Lose Weight");
}

#[tokio::test]
async fn test_health_check() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Backend is running!\n"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&format!("{}/", mock_server.uri()));

    assert_eq!(client.health_check().await.unwrap(), "Backend is running!");
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.login(&Credentials::new("a", "b")).await;

    assert!(matches!(result, Err(ClientError::Decode { .. })));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let client = Client::new("http://127.0.0.1:9");

    let result = client.health_check().await;

    assert!(result.unwrap_err().is_network());
}
