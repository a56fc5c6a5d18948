#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(target_os = "windows"))]
    {
        log::error!("no window layer for this platform; reticle runs on Windows");
        std::process::exit(1);
    }
}
