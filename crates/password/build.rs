use rustc_version::{version_meta, Channel};

fn main() {
    println!("cargo::rustc-check-cfg=cfg(CHANNEL_NIGHTLY)");
    if let Ok(meta) = version_meta() {
        if let Channel::Nightly = meta.channel {
            println!("cargo:rustc-cfg=CHANNEL_NIGHTLY");
        }
    }
}
