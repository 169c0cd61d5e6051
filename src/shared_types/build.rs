use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use wifi_setup_core::{
    events::{DeviceEvent, UiEvent, WifiEvent},
    types::{LockIcon, Tab, TextKey, ToastLevel},
    App, DelayOutput,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<WifiEvent>()?;
    gen.register_type::<DeviceEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Explicitly register other enums to ensure all variants are traced
    gen.register_type::<Tab>()?;
    gen.register_type::<ToastLevel>()?;
    gen.register_type::<TextKey>()?;
    gen.register_type::<LockIcon>()?;
    gen.register_type::<DelayOutput>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
