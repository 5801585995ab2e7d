use crate::runner::context::test_context::TestContext;
use crate::test_helpers::{expect_error, expect_prediction};
use color_eyre::Result;
use common_types::RgbColor;
use reqwest::StatusCode;
use serde_json::json;

pub async fn test_color_query(context: &TestContext) -> Result<()> {
    // ARRANGE
    let url = context.url("/color");
    let cases = [((254, 1, 1), "Red"), ((1, 254, 1), "Green"), ((1, 1, 254), "Blue")];

    for ((x, y, z), expected) in cases {
        // ACT
        let response = context
            .http_client
            .get(&url)
            .query(&[("x", x), ("y", y), ("z", z)])
            .send()
            .await?;
        let prediction = expect_prediction(response).await?;

        // ASSERT
        assert_eq!(prediction.prediction, expected);
        assert_eq!(prediction.rgb, RgbColor::new(x, y, z));
        assert_eq!(prediction.localized, None);
    }

    Ok(())
}

pub async fn test_color_query_with_language(context: &TestContext) -> Result<()> {
    // ACT
    let response = context
        .http_client
        .get(context.url("/color"))
        .query(&[("x", "255"), ("y", "0"), ("z", "0"), ("language", "es-ES")])
        .send()
        .await?;
    let prediction = expect_prediction(response).await?;

    // ASSERT
    assert_eq!(prediction.prediction, "Red");
    assert_eq!(prediction.localized.as_deref(), Some("rojo"));

    Ok(())
}

pub async fn test_color_query_rejects_bad_input(context: &TestContext) -> Result<()> {
    // ARRANGE
    let url = context.url("/color");
    let bad_queries: [&[(&str, &str)]; 4] = [
        &[("x", "300"), ("y", "0"), ("z", "0")],
        &[("x", "0"), ("y", "-1"), ("z", "0")],
        &[("x", "0"), ("y", "0")],
        &[("x", "red"), ("y", "0"), ("z", "0")],
    ];

    for query in bad_queries {
        // ACT
        let response = context.http_client.get(&url).query(query).send().await?;

        // ASSERT
        expect_error(response, StatusCode::BAD_REQUEST).await?;
    }

    Ok(())
}

pub async fn test_color_json(context: &TestContext) -> Result<()> {
    // ACT
    let response = context
        .http_client
        .post(context.url("/color"))
        .json(&json!({"red": 255, "green": 255, "blue": 0, "language": "de-DE"}))
        .send()
        .await?;
    let prediction = expect_prediction(response).await?;

    // ASSERT
    assert_eq!(prediction.prediction, "Yellow");
    assert_eq!(prediction.localized.as_deref(), Some("gelb"));

    // Malformed and out of range bodies are client errors.
    for body in [json!({"red": 1, "green": 2}), json!({"red": 1, "green": 2, "blue": 256})] {
        let response = context
            .http_client
            .post(context.url("/color"))
            .json(&body)
            .send()
            .await?;
        expect_error(response, StatusCode::BAD_REQUEST).await?;
    }

    Ok(())
}

pub async fn test_predictions_are_deterministic(context: &TestContext) -> Result<()> {
    // ARRANGE
    let colors = [(255, 255, 255), (0, 0, 0), (128, 128, 128)];

    for (x, y, z) in colors {
        // ACT
        let mut predictions = Vec::new();
        for _ in 0..3 {
            let response = context
                .http_client
                .get(context.url("/color"))
                .query(&[("x", x), ("y", y), ("z", z)])
                .send()
                .await?;
            predictions.push(expect_prediction(response).await?.prediction);
        }

        // ASSERT
        assert!(
            predictions.windows(2).all(|pair| pair[0] == pair[1]),
            "predictions for ({x}, {y}, {z}) differ: {predictions:?}"
        );
    }

    Ok(())
}
