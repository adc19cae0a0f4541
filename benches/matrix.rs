use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use transform_kit::{Degrees, FloatBuffer, Matrix3, Matrix4, Vector3};

fn model_view_matrix() -> Matrix4 {
    Matrix4::translation(1.0, -2.0, -10.0)
        * Matrix4::rotation_y(Degrees(35.0))
        * Matrix4::uniform_scaling(1.5)
}

pub fn bench_mul_matrix3(c: &mut Criterion) {
    let a = Matrix3::rotation_x(Degrees(20.0));
    let b = Matrix3::rotation_z(Degrees(-40.0));
    c.bench_function("mul_matrix3", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });
}

pub fn bench_mul_matrix4(c: &mut Criterion) {
    let a = Matrix4::perspective(Degrees(50.0), 16.0 / 9.0, 0.1, 100.0);
    let b = model_view_matrix();
    c.bench_function("mul_matrix4", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });
}

pub fn bench_project_point(c: &mut Criterion) {
    let m = Matrix4::perspective(Degrees(50.0), 16.0 / 9.0, 0.1, 100.0) * model_view_matrix();
    let point = Vector3::new(0.5, 0.25, -1.0);
    c.bench_function("project_point", |bencher| {
        bencher.iter(|| black_box(&m).project_point(black_box(&point)));
    });
}

pub fn bench_invert_matrix4(c: &mut Criterion) {
    let m = model_view_matrix();
    c.bench_function("invert_matrix4", |bencher| {
        bencher.iter(|| black_box(&m).inverted());
    });
}

pub fn bench_invert_matrix4_translation_rotation(c: &mut Criterion) {
    let m = Matrix4::translation(1.0, -2.0, -10.0) * Matrix4::rotation_y(Degrees(35.0));
    c.bench_function("invert_matrix4_translation_rotation", |bencher| {
        bencher.iter(|| black_box(&m).inverted_translation_rotation());
    });
}

pub fn bench_pack_matrix4_buffer(c: &mut Criterion) {
    let transforms = vec![model_view_matrix(); 1024];
    c.bench_function("pack_matrix4_buffer", |bencher| {
        bencher.iter(|| FloatBuffer::from_values(black_box(transforms.as_slice())));
    });
}

criterion_group!(
    benches,
    bench_mul_matrix3,
    bench_mul_matrix4,
    bench_project_point,
    bench_invert_matrix4,
    bench_invert_matrix4_translation_rotation,
    bench_pack_matrix4_buffer
);
criterion_main!(benches);
