#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

#[cfg(test)]
pub mod runner;
#[cfg(test)]
pub mod test_helpers;
#[cfg(test)]
pub mod tests;

#[cfg(test)]
mod test_runner {
    use crate::runner::context::test_context::TestContext;
    use crate::runner::orchestration_utils::setup_tracing_and_panic_handling;
    use crate::tests::test_color::{
        test_color_json, test_color_query, test_color_query_rejects_bad_input,
        test_color_query_with_language, test_predictions_are_deterministic,
    };
    use crate::tests::test_region::{
        test_detect_color_embedded_request, test_detect_color_errors, test_detect_color_in_box,
        test_detect_color_rejects_oversized_body, test_detect_color_whole_image,
    };
    use crate::tests::test_root::{test_health_endpoint, test_openapi_document, test_root_status};
    use crate::tests::test_upload::{
        test_upload_base64, test_upload_corrupt_base64, test_upload_file_path,
        test_upload_missing_file,
    };
    use crate::{execute_suite, run_test};
    use color_eyre::Result;

    #[tokio::test]
    async fn integration_suite() -> Result<()> {
        setup_tracing_and_panic_handling();
        let context = TestContext::new().await?;

        execute_suite!(
            &context,
            [
                // -- Root --
                test_health_endpoint,
                test_root_status,
                test_openapi_document,
                // -- Color --
                test_color_query,
                test_color_query_with_language,
                test_color_query_rejects_bad_input,
                test_color_json,
                test_predictions_are_deterministic,
                // -- Regions --
                test_detect_color_whole_image,
                test_detect_color_in_box,
                test_detect_color_embedded_request,
                test_detect_color_errors,
                test_detect_color_rejects_oversized_body,
                // -- Uploads --
                test_upload_file_path,
                test_upload_base64,
                test_upload_missing_file,
                test_upload_corrupt_base64,
            ]
        );

        Ok(())
    }
}
