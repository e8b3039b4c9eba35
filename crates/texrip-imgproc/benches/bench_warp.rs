use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use texrip_geometry::{Point2D, Quad};
use texrip_image::{Image, ImageSize};
use texrip_imgproc::warp::extract_quad;

fn random_image(width: usize, height: usize) -> Image<u8, 4> {
    let mut rng = rand::rng();
    let data = (0..width * height * 4).map(|_| rng.random()).collect();
    Image::new(ImageSize { width, height }, data).unwrap()
}

fn bench_extract_quad(c: &mut Criterion) {
    let mut group = c.benchmark_group("ExtractQuad");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image = random_image(*width, *height);

        // a slanted quad over most of the frame
        let (w, h) = (*width as f64, *height as f64);
        let quad = Quad::new([
            Point2D::new(w * 0.1, h * 0.15),
            Point2D::new(w * 0.9, h * 0.05),
            Point2D::new(w * 0.85, h * 0.9),
            Point2D::new(w * 0.05, h * 0.8),
        ]);

        group.bench_with_input(
            BenchmarkId::new("rayon_rows", &parameter_string),
            &(&image, &quad),
            |b, i| {
                let (src, quad) = (i.0, i.1);
                b.iter(|| extract_quad(black_box(src), black_box(quad)).unwrap())
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_extract_quad);
criterion_main!(benches);
