/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.active_tab, tab)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.scan.drawer_open, false;
///     model.form.password, String::new()
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        $crate::update_field!($model_field, $value;)
    }};
}

/// Macro for device GET requests expecting a JSON response.
///
/// The response event is tagged with the model's current session so that
/// answers arriving after an unmount can be recognised and dropped.
///
/// # Example
/// ```ignore
/// device_get!(Device, DeviceEvent, model, "/config", ConfigResponse, "Load config",
///     expect_json: DeviceConfig
/// )
/// ```
#[macro_export]
macro_rules! device_get {
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, expect_json: $response_type:ty) => {{
        let session = $model.session;
        $crate::HttpCmd::get($crate::build_url($endpoint))
            .build()
            .then_send(move |result| {
                let result: Result<$response_type, String> =
                    $crate::process_json_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event {
                    session,
                    result,
                })
            })
    }};
}

/// Macro for device POST requests with a JSON body expecting a JSON response.
///
/// A body that cannot be serialized is reported through the same response
/// event, so the handler resetting the busy flag runs either way.
///
/// # Example
/// ```ignore
/// device_post!(Wifi, WifiEvent, model, "/submit", SubmitResponse, "Submit credentials",
///     body_json: &credentials,
///     expect_json: SubmitResponse
/// )
/// ```
#[macro_export]
macro_rules! device_post {
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr, expect_json: $response_type:ty) => {{
        let session = $model.session;
        match $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => builder.build().then_send(move |result| {
                let result: Result<$response_type, String> =
                    $crate::process_json_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event {
                    session,
                    result,
                })
            }),
            Err(e) => crux_core::Command::event($crate::events::Event::$domain(
                $crate::events::$domain_event::$response_event {
                    session,
                    result: Err(format!("Failed to create {} request: {e}", $action)),
                },
            )),
        }
    }};
}
