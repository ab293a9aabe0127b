use cristal_frontend::App;

fn main() {
    console_error_panic_hook::set_once();
    cristal_frontend::init_tracing();
    yew::Renderer::<App>::new().render();
}
