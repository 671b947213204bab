use anyhow::Result;
use learngl::HelloTriangleEx1;

fn main() -> Result<()> {
    learngl::main_with::<HelloTriangleEx1>()
}
