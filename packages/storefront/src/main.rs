fn main() -> Result<(), storefront::LaunchError> {
    storefront::launch()
}
