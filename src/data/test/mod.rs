mod candidate_pool;
