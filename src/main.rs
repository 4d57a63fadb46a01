fn main() {
    worldmap_pwa::start();
}
