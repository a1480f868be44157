fn main() {
    appicon_generator_lib::run()
}
