use plum_checkers::protocol::protocol_top::run_stdio_loop;

fn main() -> std::io::Result<()> {
    run_stdio_loop()
}
