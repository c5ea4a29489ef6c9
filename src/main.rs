fn main() {
    carepoint_lib::run()
}
