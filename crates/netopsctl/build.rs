// Build script for netopsctl - embeds version at compile time

fn main() {
    // Release builds may pin a version; otherwise use Cargo.toml
    let version = std::env::var("NETOPSCTL_VERSION")
        .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=NETOPSCTL_VERSION={}", version);

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=NETOPSCTL_VERSION");
}
