/// Scales the vector to unit L2 norm in place. Stored vectors are
/// unit-normalized at write time; this tolerates providers that return
/// non-normalized output. Zero vectors are left untouched.
pub fn l2_normalize(vec: &mut [f32]) {
	let norm = vec.iter().map(|value| value * value).sum::<f32>().sqrt();

	if norm > 0.0 && (norm - 1.0).abs() > f32::EPSILON {
		for value in vec.iter_mut() {
			*value /= norm;
		}
	}
}

/// Renders a vector as the pgvector text literal (`[v1,v2,...]`) for binding
/// with a `::vector` cast.
pub fn pgvector_literal(vec: &[f32]) -> String {
	let mut out = String::with_capacity(vec.len() * 8);

	out.push('[');

	for (i, value) in vec.iter().enumerate() {
		if i > 0 {
			out.push(',');
		}

		out.push_str(&value.to_string());
	}

	out.push(']');

	out
}
